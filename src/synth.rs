//! Boilerplate synthesis: turning an ordered field list into the literal
//! Java text to splice into the file, plus the line it goes at.
//!
//! Output is a pure function of the field list, mode, and class name, so
//! identical inputs always produce byte-identical text. Re-running the
//! pipeline stays idempotent because of this.

use crate::core::{Anchor, FieldDecl, InsertionPoint, RewriteError, TransformMode};

/// Literal lines to splice plus where to splice them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedBlock {
    pub lines: Vec<String>,
    pub insertion: InsertionPoint,
}

/// Produce the replacement text for a non-empty field list.
///
/// `source_lines` is the stripped file content; it is consulted only to
/// locate the accessor-mode insertion anchor (the final closing brace).
pub fn synthesize(
    fields: &[FieldDecl],
    mode: TransformMode,
    class_name: &str,
    source_lines: &[String],
) -> Result<SynthesizedBlock, RewriteError> {
    match mode {
        TransformMode::Constructors => Ok(synthesize_constructor(fields, class_name)),
        TransformMode::Accessors => synthesize_accessors(fields, source_lines),
    }
}

/// All-fields constructor, inserted immediately after the last qualifying
/// field. Parameter and assignment order match declaration order.
fn synthesize_constructor(fields: &[FieldDecl], class_name: &str) -> SynthesizedBlock {
    let mut lines = vec![String::new(), format!("    public {}(", class_name)];

    for (i, field) in fields.iter().enumerate() {
        let terminator = if i + 1 == fields.len() { ") {" } else { "," };
        lines.push(format!(
            "            {} {}{}",
            field.type_name, field.name, terminator
        ));
    }

    for field in fields {
        lines.push(format!("        this.{} = {};", field.name, field.name));
    }

    lines.push("    }".to_string());
    lines.push(String::new());

    // Extractor guarantees fields come from the primary class body, so the
    // line after the last one is inside that body.
    let last_field_line = fields.last().map(|f| f.line).unwrap_or(0);
    SynthesizedBlock {
        lines,
        insertion: InsertionPoint {
            line: last_field_line + 1,
            anchor: Anchor::AfterLastField,
        },
    }
}

/// Getter/setter pairs for every field, emitted as one block directly
/// before the file's final closing brace.
fn synthesize_accessors(
    fields: &[FieldDecl],
    source_lines: &[String],
) -> Result<SynthesizedBlock, RewriteError> {
    let closing_brace = find_final_closing_brace(source_lines).ok_or(RewriteError::AnchorNotFound)?;

    let mut lines = vec![String::new(), "    // Getters and Setters".to_string()];
    for field in fields {
        lines.push(String::new());
        lines.extend(getter_lines(field));
        lines.push(String::new());
        lines.extend(setter_lines(field));
    }
    lines.push(String::new());

    Ok(SynthesizedBlock {
        lines,
        insertion: InsertionPoint {
            line: closing_brace,
            anchor: Anchor::BeforeFinalClosingBrace,
        },
    })
}

fn getter_lines(field: &FieldDecl) -> Vec<String> {
    vec![
        format!(
            "    public {} {}() {{",
            field.type_name,
            getter_name(&field.type_name, &field.name)
        ),
        format!("        return {};", field.name),
        "    }".to_string(),
    ]
}

fn setter_lines(field: &FieldDecl) -> Vec<String> {
    vec![
        format!(
            "    public void set{}({} {}) {{",
            capitalize(&field.name),
            field.type_name,
            field.name
        ),
        format!("        this.{} = {};", field.name, field.name),
        "    }".to_string(),
    ]
}

/// Getters follow the JavaBean convention: `getX`, except `isX` when the
/// declared type is exactly the primitive or boxed boolean.
fn getter_name(type_name: &str, field_name: &str) -> String {
    let prefix = if type_name == "boolean" || type_name == "Boolean" {
        "is"
    } else {
        "get"
    };
    format!("{}{}", prefix, capitalize(field_name))
}

/// Uppercase the first character, leave the rest unchanged.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Scan from the end of the file for the last line whose trimmed content is
/// exactly `}`, which is the class-closing brace under the
/// one-class-per-file convention.
fn find_final_closing_brace(lines: &[String]) -> Option<usize> {
    lines.iter().rposition(|line| line.trim() == "}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn field(type_name: &str, name: &str, line: usize) -> FieldDecl {
        FieldDecl {
            type_name: type_name.to_string(),
            name: name.to_string(),
            line,
        }
    }

    #[test]
    fn test_constructor_text_and_insertion_point() {
        let fields = vec![field("WidgetRepository", "repo", 4), field("Logger", "log", 5)];
        let block = synthesize(&fields, TransformMode::Constructors, "WidgetService", &[]).unwrap();

        assert_eq!(
            block.lines,
            vec![
                "",
                "    public WidgetService(",
                "            WidgetRepository repo,",
                "            Logger log) {",
                "        this.repo = repo;",
                "        this.log = log;",
                "    }",
                "",
            ]
        );
        assert_eq!(block.insertion.line, 6);
        assert_eq!(block.insertion.anchor, Anchor::AfterLastField);
    }

    #[test]
    fn test_constructor_single_parameter() {
        let fields = vec![field("OrderRepository", "orders", 2)];
        let block = synthesize(&fields, TransformMode::Constructors, "OrderService", &[]).unwrap();

        assert_eq!(block.lines[1], "    public OrderService(");
        assert_eq!(block.lines[2], "            OrderRepository orders) {");
    }

    #[test]
    fn test_constructor_order_matches_declaration_order() {
        let fields = vec![
            field("A", "a", 1),
            field("B", "b", 2),
            field("C", "c", 3),
        ];
        let block = synthesize(&fields, TransformMode::Constructors, "Svc", &[]).unwrap();
        let body: Vec<&String> = block
            .lines
            .iter()
            .filter(|l| l.contains("this."))
            .collect();
        assert_eq!(body, vec!["        this.a = a;", "        this.b = b;", "        this.c = c;"]);
    }

    #[test]
    fn test_boolean_getter_uses_is_prefix() {
        assert_eq!(getter_name("boolean", "active"), "isActive");
        assert_eq!(getter_name("Boolean", "paid"), "isPaid");
        assert_eq!(getter_name("int", "count"), "getCount");
        assert_eq!(getter_name("BooleanHolder", "flag"), "getFlag");
    }

    #[test]
    fn test_accessor_block_inserted_before_final_brace() {
        let source: Vec<String> = ["public class Order {", "    private boolean paid;", "}"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let fields = vec![field("boolean", "paid", 1)];
        let block = synthesize(&fields, TransformMode::Accessors, "Order", &source).unwrap();

        assert_eq!(
            block.lines,
            vec![
                "",
                "    // Getters and Setters",
                "",
                "    public boolean isPaid() {",
                "        return paid;",
                "    }",
                "",
                "    public void setPaid(boolean paid) {",
                "        this.paid = paid;",
                "    }",
                "",
            ]
        );
        assert_eq!(block.insertion.line, 2);
        assert_eq!(block.insertion.anchor, Anchor::BeforeFinalClosingBrace);
    }

    #[test]
    fn test_missing_closing_brace_is_structural_failure() {
        let source = vec!["public class Broken {".to_string()];
        let fields = vec![field("Long", "id", 0)];
        let err = synthesize(&fields, TransformMode::Accessors, "Broken", &source).unwrap_err();
        assert_eq!(err, RewriteError::AnchorNotFound);
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let fields = vec![field("Long", "id", 1), field("String", "name", 2)];
        let source: Vec<String> = ["public class P {", "", "}"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let a = synthesize(&fields, TransformMode::Accessors, "P", &source).unwrap();
        let b = synthesize(&fields, TransformMode::Accessors, "P", &source).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_capitalize_keeps_remainder() {
        assert_eq!(capitalize("orderItems"), "OrderItems");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }
}
