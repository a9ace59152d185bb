use std::collections::HashSet;

use rand::Rng;
use rand::seq::{SliceRandom, index};

use crate::config::TaskConfig;
use crate::foundation::core::{Canvas, Position};
use crate::foundation::error::{SwapError, SwapResult};
use crate::layout::compute_positions;
use crate::symbol::pool::{Symbol, SymbolId, SymbolPool};

/// Prompt family used when a task does not name one.
pub const DEFAULT_TASK_TYPE: &str = "default";

/// Everything needed to render and describe one task. Immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TaskData {
    symbols: Vec<Symbol>,
    target_index: usize,
    new_symbol: Symbol,
    positions: Vec<Position>,
    substituted_symbols: Vec<Symbol>,
    task_type: String,
}

impl TaskData {
    /// Assemble task data from explicit parts, checking every invariant.
    ///
    /// `substituted_symbols` is derived by positional replacement at `target_index`.
    pub fn new(
        symbols: Vec<Symbol>,
        target_index: usize,
        new_symbol: Symbol,
        positions: Vec<Position>,
    ) -> SwapResult<Self> {
        if symbols.is_empty() {
            return Err(SwapError::configuration("task needs at least one symbol"));
        }
        if target_index >= symbols.len() {
            return Err(SwapError::configuration(format!(
                "target_index {target_index} out of range for {} symbols",
                symbols.len()
            )));
        }
        if positions.len() != symbols.len() {
            return Err(SwapError::configuration(format!(
                "{} positions for {} symbols",
                positions.len(),
                symbols.len()
            )));
        }
        let ids: HashSet<SymbolId> = symbols.iter().map(Symbol::id).collect();
        if ids.len() != symbols.len() {
            return Err(SwapError::configuration(
                "sequence symbols must have distinct (shape, color) identities",
            ));
        }
        if ids.contains(&new_symbol.id()) {
            return Err(SwapError::configuration(format!(
                "replacement {new_symbol} already appears in the sequence"
            )));
        }
        Ok(Self::assemble(symbols, target_index, new_symbol, positions))
    }

    fn assemble(
        symbols: Vec<Symbol>,
        target_index: usize,
        new_symbol: Symbol,
        positions: Vec<Position>,
    ) -> Self {
        let substituted_symbols = symbols
            .iter()
            .enumerate()
            .map(|(i, s)| if i == target_index { new_symbol } else { *s })
            .collect();
        Self {
            symbols,
            target_index,
            new_symbol,
            positions,
            substituted_symbols,
            task_type: DEFAULT_TASK_TYPE.to_string(),
        }
    }

    /// The initial sequence, in draw order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Index of the symbol marked for replacement.
    pub fn target_index(&self) -> usize {
        self.target_index
    }

    /// The symbol currently at `target_index`.
    pub fn target_symbol(&self) -> Symbol {
        self.symbols[self.target_index]
    }

    /// The replacement; disjoint in identity from every sequence symbol.
    pub fn new_symbol(&self) -> Symbol {
        self.new_symbol
    }

    /// Pixel centers, one per symbol.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// The sequence after substitution.
    pub fn substituted_symbols(&self) -> &[Symbol] {
        &self.substituted_symbols
    }

    /// Prompt family key.
    pub fn task_type(&self) -> &str {
        &self.task_type
    }

    /// Number of symbols in the sequence.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`: task data holds at least one symbol.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Draws sequences and replacements from a [`SymbolPool`].
///
/// Sampling is pool-minus-used filtering, never retry-until-unique, so cost stays bounded as the
/// pool empties.
#[derive(Clone, Debug)]
pub struct SequenceSampler {
    pool: SymbolPool,
    canvas: Canvas,
    spacing: u32,
    min_len: usize,
    max_len: usize,
}

impl SequenceSampler {
    /// Create a sampler over the standard pool, laid out per `config`.
    pub fn new(config: &TaskConfig) -> Self {
        Self::with_pool(config, SymbolPool::standard())
    }

    /// Create a sampler over a custom pool.
    pub fn with_pool(config: &TaskConfig, pool: SymbolPool) -> Self {
        Self {
            pool,
            canvas: config.image_size,
            spacing: config.symbol_spacing,
            min_len: config.min_sequence_length,
            max_len: config.max_sequence_length,
        }
    }

    /// The pool symbols are drawn from.
    pub fn pool(&self) -> &SymbolPool {
        &self.pool
    }

    /// Draw `length` distinct symbols without replacement, preserving draw order.
    pub fn sample_sequence<R: Rng + ?Sized>(
        &self,
        length: usize,
        rng: &mut R,
    ) -> SwapResult<Vec<Symbol>> {
        let available = self.pool.len();
        if length > available {
            return Err(SwapError::configuration(format!(
                "requested sequence length {length} exceeds available unique combinations {available}"
            )));
        }
        let all = self.pool.all_combinations();
        Ok(index::sample(rng, available, length)
            .into_iter()
            .map(|i| all[i])
            .collect())
    }

    /// Draw one symbol uniformly from the pool minus `existing`.
    pub fn sample_replacement<R: Rng + ?Sized>(
        &self,
        existing: &HashSet<SymbolId>,
        rng: &mut R,
    ) -> SwapResult<Symbol> {
        self.pool
            .excluding(existing)
            .choose(rng)
            .copied()
            .ok_or_else(|| {
                SwapError::configuration("no available unique symbol combinations left")
            })
    }

    /// Draw a complete task with a length in `[min_len, max_len]`.
    ///
    /// Draw order is fixed: length, sequence, target index, replacement.
    pub fn build_task_data<R: Rng + ?Sized>(
        &self,
        min_len: usize,
        max_len: usize,
        rng: &mut R,
    ) -> SwapResult<TaskData> {
        if min_len == 0 {
            return Err(SwapError::configuration("sequence length must be >= 1"));
        }
        if min_len > max_len {
            return Err(SwapError::configuration(format!(
                "min sequence length {min_len} exceeds max {max_len}"
            )));
        }

        let length = rng.gen_range(min_len..=max_len);
        let symbols = self.sample_sequence(length, rng)?;
        let target_index = rng.gen_range(0..length);

        let existing: HashSet<SymbolId> = symbols.iter().map(Symbol::id).collect();
        debug_assert_eq!(existing.len(), symbols.len(), "sampled duplicate symbols");
        let new_symbol = self.sample_replacement(&existing, rng)?;

        let positions =
            compute_positions(length, self.canvas.width, self.canvas.height, self.spacing);
        debug_assert_eq!(positions.len(), symbols.len());

        Ok(TaskData::assemble(symbols, target_index, new_symbol, positions))
    }

    /// Draw a task using the configured length range.
    pub fn sample_task<R: Rng + ?Sized>(&self, rng: &mut R) -> SwapResult<TaskData> {
        self.build_task_data(self.min_len, self.max_len, rng)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/symbol/sampler.rs"]
mod tests;
