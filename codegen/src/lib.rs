mod c99;

use model::Function;

pub use c99::{emit_expr, emit_stmt};

const INDENT: &str = "    ";

pub struct Codegen {
    indent: &'static str,
}

impl Default for Codegen {
    fn default() -> Self {
        Self::new()
    }
}

impl Codegen {
    pub fn new() -> Self {
        Self { indent: INDENT }
    }

    /// Render the function as a C99 definition taking `void`, one statement per line.
    #[tracing::instrument(level = "trace", skip_all, fields(function = %func.name))]
    pub fn gen_function(&self, func: &Function) -> String {
        let mut output = String::new();
        output.push_str(&format!("int {}(void) {{\n", func.name));

        for stmt in &func.body {
            output.push_str(self.indent);
            output.push_str(&emit_stmt(stmt));
            output.push('\n');
        }

        output.push_str("}\n");

        tracing::debug!(statements = func.body.len(), output_len = output.len(), "Generated C99");
        output
    }
}
