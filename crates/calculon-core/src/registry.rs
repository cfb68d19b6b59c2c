//! Operation strategy registry and calculator factory.

use std::collections::HashMap;
use std::sync::Arc;

use crate::calculator::StringCalculator;
use crate::delimiter::{DefaultDelimiterStrategy, DelimiterStrategy};
use crate::operation::OperationType;
use crate::options::CalculatorOptions;
use crate::strategy::{
    AddStrategy, DivideStrategy, MultiplyStrategy, OperationStrategy, SubtractStrategy,
};

/// Maps each operation to the strategy that implements it.
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    strategies: HashMap<OperationType, Arc<dyn OperationStrategy>>,
}

impl StrategyRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with Add, Subtract, Multiply and Divide.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new()
            .with(Arc::new(AddStrategy::new()))
            .with(Arc::new(SubtractStrategy::new()))
            .with(Arc::new(MultiplyStrategy::new()))
            .with(Arc::new(DivideStrategy::new()))
    }

    /// Register a strategy under its own operation, replacing any previous one.
    #[must_use]
    pub fn with(mut self, strategy: Arc<dyn OperationStrategy>) -> Self {
        self.strategies.insert(strategy.operation(), strategy);
        self
    }

    /// Look up the strategy for an operation.
    #[must_use]
    pub fn get(&self, op: OperationType) -> Option<Arc<dyn OperationStrategy>> {
        self.strategies.get(&op).map(Arc::clone)
    }

    /// Registered operations in declaration order.
    #[must_use]
    pub fn available(&self) -> Vec<OperationType> {
        OperationType::ALL
            .into_iter()
            .filter(|op| self.strategies.contains_key(op))
            .collect()
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("available", &self.available())
            .finish()
    }
}

/// Factory trait for creating calculators.
pub trait CalculatorFactory {
    /// Build a calculator for the given options.
    fn create(&self, options: CalculatorOptions) -> StringCalculator;
}

/// Wires the default delimiter strategy and all four operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFactory;

impl DefaultFactory {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CalculatorFactory for DefaultFactory {
    fn create(&self, options: CalculatorOptions) -> StringCalculator {
        let options = options.normalize();
        let delimiters: Vec<Arc<dyn DelimiterStrategy>> = vec![Arc::new(
            DefaultDelimiterStrategy::new(options.alternate_delimiter.clone()),
        )];
        StringCalculator::new(delimiters, StrategyRegistry::with_defaults(), options)
    }
}
