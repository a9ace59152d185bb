use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::foundation::error::{SwapError, SwapResult};
use crate::symbol::pool::Symbol;
use crate::symbol::sampler::DEFAULT_TASK_TYPE;

const COLOR_SLOT: &str = "{color}";
const SHAPE_SLOT: &str = "{shape}";

const DEFAULT_TEMPLATES: &[&str] = &[
    "Substitute the target symbol with a {color} {shape} in the sequence. The initial image \
     displays a horizontal sequence of symbols, each a distinct geometric shape with a specific \
     color. Exactly one symbol is marked as the substitution target by a red rectangular border \
     surrounding it. The final state must show the sequence with the target replaced by the \
     {color} {shape}, while every other symbol keeps its original shape, color, and position.",
    "Perform a symbol substitution operation on the marked target. The scene contains a \
     horizontal sequence of colored geometric symbols arranged from left to right, and one of \
     them is framed by a red border. No other symbol carries this marking. Replace the framed \
     symbol with a {color} {shape}. After substitution the sequence keeps the same number of \
     symbols, and the {color} {shape} appears at the exact position where the target was.",
    "Execute a symbol editing task: substitute the target symbol with a {color} {shape}. The \
     initial state presents a sequence of distinct symbols, each defined by its shape and color. \
     Exactly one of them is designated as the target by a red rectangular border, which leaves \
     no ambiguity about which symbol must change. The final state should display the \
     {color} {shape} at the target's sequential position, with all other symbols preserving their \
     order, appearance, and positions.",
    "Replace the marked symbol with a {color} {shape} in the symbol sequence. The sequence holds \
     several distinct colored geometric symbols, and exactly one is enclosed by a red \
     rectangular border that identifies it as the symbol to replace. Substitute only that \
     symbol. The resulting sequence must contain the {color} {shape} at the target's location \
     and leave every other symbol unchanged, with the total number of symbols the same before \
     and after.",
];

const SIMPLE_TEMPLATES: &[&str] = &[
    "Substitute the target symbol marked with a red border with a {color} {shape}. Only the \
     symbol enclosed by the red rectangular border becomes a {color} {shape}; all other symbols \
     stay in their original positions.",
    "Replace the marked symbol with a {color} {shape} in the sequence. The symbol to substitute \
     is indicated by a red border around it. After substitution only that slot holds the \
     {color} {shape}, and all other symbols keep their order and positions.",
];

/// Natural-language instruction templates, keyed by task type.
///
/// Every template names the replacement through `{color}` and `{shape}` placeholders so each
/// prompt has a unique, unambiguous answer.
#[derive(Clone, Debug)]
pub struct PromptSelector {
    templates: BTreeMap<String, Vec<String>>,
}

impl Default for PromptSelector {
    fn default() -> Self {
        let mut templates = BTreeMap::new();
        templates.insert(DEFAULT_TASK_TYPE.to_string(), to_owned(DEFAULT_TEMPLATES));
        templates.insert("simple".to_string(), to_owned(SIMPLE_TEMPLATES));
        Self { templates }
    }
}

impl PromptSelector {
    /// The built-in template families (`"default"` and `"simple"`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace or add the template family for `task_type`.
    pub fn with_templates(
        mut self,
        task_type: impl Into<String>,
        templates: impl IntoIterator<Item = impl Into<String>>,
    ) -> SwapResult<Self> {
        let templates: Vec<String> = templates.into_iter().map(Into::into).collect();
        if templates.is_empty() {
            return Err(SwapError::configuration(
                "a prompt template family needs at least one template",
            ));
        }
        self.templates.insert(task_type.into(), templates);
        Ok(self)
    }

    /// Known task types.
    pub fn task_types(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Pick one template for `task_type` uniformly at random and fill it.
    ///
    /// Unknown task types fall back to `"default"`.
    pub fn select<R: Rng + ?Sized>(
        &self,
        task_type: &str,
        new_symbol: Option<&Symbol>,
        rng: &mut R,
    ) -> SwapResult<String> {
        let symbol = new_symbol.ok_or(SwapError::MissingSymbol)?;
        let template = self
            .family(task_type)?
            .choose(rng)
            .ok_or_else(|| SwapError::configuration("empty prompt template family"))?;
        Ok(fill(template, symbol))
    }

    /// Every template for `task_type`, filled, in declaration order.
    pub fn select_all(
        &self,
        task_type: &str,
        new_symbol: Option<&Symbol>,
    ) -> SwapResult<Vec<String>> {
        let symbol = new_symbol.ok_or(SwapError::MissingSymbol)?;
        Ok(self
            .family(task_type)?
            .iter()
            .map(|t| fill(t, symbol))
            .collect())
    }

    fn family(&self, task_type: &str) -> SwapResult<&[String]> {
        self.templates
            .get(task_type)
            .or_else(|| self.templates.get(DEFAULT_TASK_TYPE))
            .map(Vec::as_slice)
            .ok_or_else(|| SwapError::configuration("no \"default\" prompt template family"))
    }
}

fn fill(template: &str, symbol: &Symbol) -> String {
    template
        .replace(COLOR_SLOT, symbol.color_name.name())
        .replace(SHAPE_SLOT, symbol.shape.name())
}

fn to_owned(templates: &[&str]) -> Vec<String> {
    templates.iter().map(|t| (*t).to_string()).collect()
}

#[cfg(test)]
#[path = "../tests/unit/prompts.rs"]
mod tests;
