//! A reference host for compiled programs.

use std::collections::HashMap;

use super::program::{Instruction, Program};
use super::runtime::{Output, Runtime};
use crate::interpreter::FormatError;
use crate::types::Value;

impl Program {
    /// Execute the program against `bindings` with the built-in runtime.
    ///
    /// Missing bindings render as empty values instead of failing.
    ///
    /// # Examples
    ///
    /// ```
    /// use messageformat::{compile, locale, params};
    ///
    /// let program = compile(&locale!("en"), "Hello {NAME}").unwrap();
    /// assert_eq!(program.render(&params! { "NAME" => "John" }).unwrap(), "Hello John");
    /// assert_eq!(program.render(&params! {}).unwrap(), "Hello ");
    /// ```
    pub fn render(&self, bindings: &HashMap<String, Value>) -> Result<String, FormatError> {
        self.render_with(bindings, &str::to_string)
    }

    /// Execute the program, passing every substituted value through
    /// `escape`. Literal text from the pattern is emitted unescaped.
    pub fn render_with(
        &self,
        bindings: &HashMap<String, Value>,
        escape: &dyn Fn(&str) -> String,
    ) -> Result<String, FormatError> {
        self.execute(bindings, &Runtime::default(), escape)
    }

    /// Execute the program with explicit runtime collaborators.
    pub fn execute(
        &self,
        bindings: &HashMap<String, Value>,
        runtime: &Runtime<'_>,
        escape: &dyn Fn(&str) -> String,
    ) -> Result<String, FormatError> {
        let host = Host {
            bindings,
            runtime,
            escape,
        };
        let mut output = String::new();
        host.run(&self.nodes, &mut output)?;
        Ok(output)
    }
}

struct Host<'a> {
    bindings: &'a HashMap<String, Value>,
    runtime: &'a Runtime<'a>,
    escape: &'a dyn Fn(&str) -> String,
}

impl Host<'_> {
    fn run(&self, nodes: &[Instruction], output: &mut String) -> Result<(), FormatError> {
        for node in nodes {
            match node {
                Instruction::Text(text) => output.push_str(text),
                Instruction::Field(name) => {
                    let text = self.runtime.print(name, self.bindings.get(name))?;
                    output.push_str(&(self.escape)(&text));
                }
                Instruction::Call(call) => match self.runtime.invoke(call, self.bindings)? {
                    Output::Text(text) => output.push_str(&(self.escape)(&text)),
                    Output::Bool(_) => {
                        return Err(FormatError::MalformedCall {
                            function: call.function.name(),
                        });
                    }
                },
                Instruction::If {
                    condition,
                    then,
                    otherwise,
                } => match self.runtime.invoke(condition, self.bindings)? {
                    Output::Bool(true) => self.run(then, output)?,
                    Output::Bool(false) => self.run(otherwise, output)?,
                    Output::Text(_) => {
                        return Err(FormatError::MalformedCall {
                            function: condition.function.name(),
                        });
                    }
                },
            }
        }
        Ok(())
    }
}

/// Escape `&`, `<`, `>`, `"` and `'` for HTML text and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
