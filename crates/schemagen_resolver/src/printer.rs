//! SDL printing for generated schemas.

use crate::schema::{CompositeDef, EnumDef, NamedKind, TypeDefinition, SPEC_SCALARS};
use indexmap::IndexSet;

/// Printing options.
#[derive(Debug, Clone)]
pub struct PrintOptions {
    /// Number of spaces for indentation.
    pub indent_size: usize,
    /// Use tabs instead of spaces.
    pub use_tabs: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            indent_size: 2,
            use_tabs: false,
        }
    }
}

/// Prints type definitions as SDL.
pub struct SchemaPrinter {
    options: PrintOptions,
    output: String,
    indent: usize,
}

impl SchemaPrinter {
    /// Creates a new printer.
    #[must_use]
    pub fn new(options: PrintOptions) -> Self {
        Self {
            options,
            output: String::new(),
            indent: 0,
        }
    }

    /// Prints a schema: declarations for the scalars the definitions use
    /// beyond the built-in ones, then every definition in order.
    pub fn print_schema<'d, I>(&mut self, definitions: I) -> String
    where
        I: IntoIterator<Item = &'d TypeDefinition>,
    {
        self.output.clear();
        let definitions: Vec<_> = definitions.into_iter().collect();

        let mut blocks = 0;
        for scalar in custom_scalars(&definitions) {
            if blocks > 0 {
                self.output.push_str("\n\n");
            }
            self.output.push_str("scalar ");
            self.output.push_str(scalar);
            blocks += 1;
        }

        for def in definitions {
            if blocks > 0 {
                self.output.push_str("\n\n");
            }
            self.print(def);
            blocks += 1;
        }

        if blocks > 0 {
            self.output.push('\n');
        }
        self.output.clone()
    }

    /// Prints one definition.
    pub fn print_definition(&mut self, def: &TypeDefinition) -> String {
        self.output.clear();
        self.print(def);
        self.output.clone()
    }

    fn print(&mut self, def: &TypeDefinition) {
        match def {
            TypeDefinition::Object(def) => self.print_composite("type", def),
            TypeDefinition::InputObject(def) => self.print_composite("input", def),
            TypeDefinition::Enum(def) => self.print_enum(def),
        }
    }

    fn print_composite(&mut self, keyword: &str, def: &CompositeDef) {
        self.output.push_str(keyword);
        self.output.push(' ');
        self.output.push_str(&def.name);
        if def.fields.is_empty() {
            return;
        }

        self.output.push_str(" {\n");
        self.indent += 1;
        for field in def.fields.values() {
            self.push_indent();
            self.output.push_str(&field.name);
            self.output.push_str(": ");
            self.output.push_str(&field.ty.to_string());
            self.output.push('\n');
        }
        self.indent -= 1;
        self.output.push('}');
    }

    fn print_enum(&mut self, def: &EnumDef) {
        self.output.push_str("enum ");
        self.output.push_str(&def.name);
        if def.values.is_empty() {
            return;
        }

        self.output.push_str(" {\n");
        self.indent += 1;
        for value in &def.values {
            self.push_indent();
            self.output.push_str(&value.name);
            self.output.push('\n');
        }
        self.indent -= 1;
        self.output.push('}');
    }

    fn push_indent(&mut self) {
        if self.options.use_tabs {
            for _ in 0..self.indent {
                self.output.push('\t');
            }
        } else {
            for _ in 0..(self.indent * self.options.indent_size) {
                self.output.push(' ');
            }
        }
    }
}

/// Scalars referenced by fields that a schema has to declare, in order of
/// first use.
fn custom_scalars<'d>(definitions: &[&'d TypeDefinition]) -> IndexSet<&'d str> {
    definitions
        .iter()
        .copied()
        .filter_map(TypeDefinition::fields)
        .flat_map(|fields| fields.values())
        .map(|field| field.ty.named_type())
        .filter(|named| named.kind == NamedKind::Scalar)
        .map(|named| named.name.as_str())
        .filter(|name| !SPEC_SCALARS.iter().any(|spec| spec == name))
        .collect()
}

/// Prints a definition with default options.
#[must_use]
pub fn print_definition(def: &TypeDefinition) -> String {
    SchemaPrinter::new(PrintOptions::default()).print_definition(def)
}

/// Prints a schema with default options.
pub fn print_schema<'d, I>(definitions: I) -> String
where
    I: IntoIterator<Item = &'d TypeDefinition>,
{
    SchemaPrinter::new(PrintOptions::default()).print_schema(definitions)
}
