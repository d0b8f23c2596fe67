/// Rendering of output records as object literals for the game's event table.

use std::fmt::Write;

use crate::schema::effect::EffectMap;
use crate::schema::gate::Gate;
use crate::schema::side_event::{EventOption, OutputRecord};

/// Quote `s` as a double-quoted string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// `{ energy: -2, stress: +1 }`; deltas always carry a sign.
pub fn render_effects(effects: &EffectMap) -> String {
    if effects.is_empty() {
        return "{}".to_string();
    }
    let fields: Vec<String> = effects
        .iter()
        .map(|(stat, delta)| format!("{}: {:+}", stat.key(), delta))
        .collect();
    format!("{{ {} }}", fields.join(", "))
}

/// `gate({ route: "pg", termMin: 7, ... })`, omitting absent bounds.
pub fn render_gate(gate: &Gate) -> String {
    let mut fields = vec![format!("route: {}", quote(gate.route.as_str()))];
    let bounds = [
        ("termMin", gate.term_min),
        ("termMax", gate.term_max),
        ("weekMin", gate.week_min),
        ("weekMax", gate.week_max),
    ];
    for (name, value) in bounds {
        if let Some(v) = value {
            fields.push(format!("{}: {}", name, v));
        }
    }
    format!("gate({{ {} }})", fields.join(", "))
}

pub fn render_option(option: &EventOption) -> String {
    format!(
        "{{ text: {}, effects: {}, note: {} }}",
        quote(&option.text),
        render_effects(&option.effects),
        quote(&option.note)
    )
}

/// One event block, ending in `},` with no trailing newline.
pub fn render_record(record: &OutputRecord) -> String {
    let tags: Vec<String> = record.tags.iter().map(|t| quote(t)).collect();
    let gates: Vec<String> = record.gates.iter().map(render_gate).collect();
    let options: Vec<String> = record
        .options
        .iter()
        .map(|o| format!("        {}", render_option(o)))
        .collect();

    let mut block = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(block, "    {{");
    let _ = writeln!(block, "      id: {},", quote(&record.id));
    let _ = writeln!(block, "      title: {},", quote(&record.title));
    let _ = writeln!(block, "      text: {},", quote(&record.text));
    let _ = writeln!(block, "      tags: [{}],", tags.join(", "));
    let _ = writeln!(block, "      weight: {},", record.weight);
    let _ = writeln!(block, "      cooldownWeeks: {},", record.cooldown_weeks);
    let _ = writeln!(block, "      gates: [{}],", gates.join(", "));
    let _ = writeln!(block, "      options: [");
    let _ = writeln!(block, "{}", options.join(",\n"));
    let _ = writeln!(block, "      ]");
    block.push_str("    },");
    block
}

/// The full artifact: header line, then every block, newline-terminated.
pub fn render_document(header: &str, records: &[OutputRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(header.to_string());
    lines.extend(records.iter().map(render_record));
    let mut doc = lines.join("\n");
    doc.push('\n');
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::effect::Stat;
    use crate::schema::route::RouteKey;

    fn option(text: &str, effects: EffectMap, note: &str) -> EventOption {
        EventOption {
            text: text.to_string(),
            effects,
            note: note.to_string(),
        }
    }

    #[test]
    fn quote_escapes_special_characters() {
        assert_eq!(quote("细节更稳。"), "\"细节更稳。\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote("a\\b"), "\"a\\\\b\"");
        assert_eq!(quote("line\nbreak"), "\"line\\nbreak\"");
    }

    #[test]
    fn effects_carry_signs() {
        let effects = EffectMap::new([(Stat::Energy, -2), (Stat::Stress, 1), (Stat::Money, 0)]);
        assert_eq!(
            render_effects(&effects),
            "{ energy: -2, stress: +1, money: +0 }"
        );
        assert_eq!(render_effects(&EffectMap::default()), "{}");
    }

    #[test]
    fn gate_omits_absent_bounds() {
        let closed = Gate::term_weeks(&RouteKey::Pg, 7, (1, 4));
        assert_eq!(
            render_gate(&closed),
            r#"gate({ route: "pg", termMin: 7, termMax: 7, weekMin: 1, weekMax: 4 })"#
        );
        let open = Gate::from_term(&RouteKey::Qiuzhao, 8);
        assert_eq!(
            render_gate(&open),
            r#"gate({ route: "qiuzhao", termMin: 8 })"#
        );
    }

    #[test]
    fn option_literal() {
        let o = option(
            "对照要求",
            EffectMap::new([(Stat::Energy, -3), (Stat::TermGradeBonus, 1)]),
            "更有条理。",
        );
        assert_eq!(
            render_option(&o),
            r#"{ text: "对照要求", effects: { energy: -3, termGradeBonus: +1 }, note: "更有条理。" }"#
        );
    }

    #[test]
    fn record_block_layout() {
        let record = OutputRecord {
            id: "X_01".to_string(),
            title: "T".to_string(),
            text: "body".to_string(),
            route: RouteKey::Abroad,
            tags: vec![RouteKey::Abroad.tag()],
            weight: 6,
            cooldown_weeks: 4,
            gates: vec![
                Gate::term_weeks(&RouteKey::Abroad, 7, (1, 16)),
                Gate::term_weeks(&RouteKey::Abroad, 8, (1, 9)),
            ],
            options: [
                option("a", EffectMap::new([(Stat::Mood, 1)]), "na"),
                option("b", EffectMap::new([(Stat::Social, 1)]), "nb"),
                option("c", EffectMap::new([(Stat::Energy, 2)]), "nc"),
            ],
        };
        let expected = "    {\n\
                        \x20     id: \"X_01\",\n\
                        \x20     title: \"T\",\n\
                        \x20     text: \"body\",\n\
                        \x20     tags: [\"route:abroad\"],\n\
                        \x20     weight: 6,\n\
                        \x20     cooldownWeeks: 4,\n\
                        \x20     gates: [gate({ route: \"abroad\", termMin: 7, termMax: 7, weekMin: 1, weekMax: 16 }), \
                        gate({ route: \"abroad\", termMin: 8, termMax: 8, weekMin: 1, weekMax: 9 })],\n\
                        \x20     options: [\n\
                        \x20       { text: \"a\", effects: { mood: +1 }, note: \"na\" },\n\
                        \x20       { text: \"b\", effects: { social: +1 }, note: \"nb\" },\n\
                        \x20       { text: \"c\", effects: { energy: +2 }, note: \"nc\" }\n\
                        \x20     ]\n\
                        \x20   },";
        assert_eq!(render_record(&record), expected);
    }

    #[test]
    fn empty_document_is_header_only() {
        assert_eq!(render_document("// head", &[]), "// head\n");
    }
}
