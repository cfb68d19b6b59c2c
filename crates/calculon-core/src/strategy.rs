//! Operation strategy trait and the four arithmetic implementations.
//!
//! `OperationStrategy` is the narrow interface the pipeline calls:
//! compute a value and describe the computation as a formula.
//! Strategies are lenient on their own; hard failures such as a zero
//! divisor in second position are raised by the pipeline before `execute`.

use rust_decimal::Decimal;

use crate::calculator::CalcError;
use crate::operation::OperationType;

/// Computes a result and a display formula from a list of numbers.
pub trait OperationStrategy: Send + Sync {
    /// Compute the result of applying this operation left to right.
    fn execute(&self, numbers: &[Decimal]) -> Result<Decimal, CalcError>;

    /// Operands joined by the operator symbol. Empty for an empty list.
    fn formula(&self, numbers: &[Decimal]) -> String {
        join_operands(numbers, self.operation().symbol())
    }

    /// The operation this strategy implements.
    fn operation(&self) -> OperationType;

    /// Get the name of this strategy.
    fn name(&self) -> &str;
}

fn join_operands(numbers: &[Decimal], symbol: &str) -> String {
    numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(symbol)
}

/// Sum of all numbers, starting from zero.
pub struct AddStrategy;

impl AddStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for AddStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationStrategy for AddStrategy {
    fn execute(&self, numbers: &[Decimal]) -> Result<Decimal, CalcError> {
        numbers
            .iter()
            .try_fold(Decimal::ZERO, |acc, n| acc.checked_add(*n))
            .ok_or(CalcError::Overflow)
    }

    fn formula(&self, numbers: &[Decimal]) -> String {
        match numbers {
            [single] => single.to_string(),
            _ => join_operands(numbers, self.operation().symbol()),
        }
    }

    fn operation(&self) -> OperationType {
        OperationType::Add
    }

    fn name(&self) -> &'static str {
        "Add"
    }
}

/// Left-to-right subtraction. Has no seed, so an empty list is an error.
pub struct SubtractStrategy;

impl SubtractStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SubtractStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationStrategy for SubtractStrategy {
    fn execute(&self, numbers: &[Decimal]) -> Result<Decimal, CalcError> {
        let (first, rest) = numbers.split_first().ok_or(CalcError::EmptyOperands)?;
        rest.iter()
            .try_fold(*first, |acc, n| acc.checked_sub(*n))
            .ok_or(CalcError::Overflow)
    }

    fn operation(&self) -> OperationType {
        OperationType::Subtract
    }

    fn name(&self) -> &'static str {
        "Subtract"
    }
}

/// Product of all numbers, starting from one.
pub struct MultiplyStrategy;

impl MultiplyStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for MultiplyStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationStrategy for MultiplyStrategy {
    fn execute(&self, numbers: &[Decimal]) -> Result<Decimal, CalcError> {
        numbers
            .iter()
            .try_fold(Decimal::ONE, |acc, n| acc.checked_mul(*n))
            .ok_or(CalcError::Overflow)
    }

    fn operation(&self) -> OperationType {
        OperationType::Multiply
    }

    fn name(&self) -> &'static str {
        "Multiply"
    }
}

/// Left-to-right division.
///
/// Returns zero when fewer than two numbers are given or the second one
/// is zero. A zero divisor further along the fold is an error.
pub struct DivideStrategy;

impl DivideStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for DivideStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationStrategy for DivideStrategy {
    fn execute(&self, numbers: &[Decimal]) -> Result<Decimal, CalcError> {
        match numbers {
            [first, second, rest @ ..] if !second.is_zero() => {
                let seed = first.checked_div(*second).ok_or(CalcError::Overflow)?;
                rest.iter().try_fold(seed, |acc, n| {
                    if n.is_zero() {
                        return Err(CalcError::DivideByZero);
                    }
                    acc.checked_div(*n).ok_or(CalcError::Overflow)
                })
            }
            _ => Ok(Decimal::ZERO),
        }
    }

    fn operation(&self) -> OperationType {
        OperationType::Divide
    }

    fn name(&self) -> &'static str {
        "Divide"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn nums(values: &[&str]) -> Vec<Decimal> {
        values.iter().map(|s| d(s)).collect()
    }

    fn all_strategies() -> Vec<Box<dyn OperationStrategy>> {
        vec![
            Box::new(AddStrategy::new()),
            Box::new(SubtractStrategy::new()),
            Box::new(MultiplyStrategy::new()),
            Box::new(DivideStrategy::new()),
        ]
    }

    #[test]
    fn add_execute() {
        let add = AddStrategy::new();
        assert_eq!(add.execute(&nums(&["1", "2"])).unwrap(), d("3"));
        assert_eq!(add.execute(&nums(&["0", "0"])).unwrap(), d("0"));
        assert_eq!(add.execute(&nums(&["-1", "1"])).unwrap(), d("0"));
        assert_eq!(add.execute(&nums(&["0.1", "0.2"])).unwrap(), d("0.3"));
    }

    #[test]
    fn subtract_execute() {
        let sub = SubtractStrategy::new();
        assert_eq!(sub.execute(&nums(&["5", "3"])).unwrap(), d("2"));
        assert_eq!(sub.execute(&nums(&["0", "0"])).unwrap(), d("0"));
        assert_eq!(sub.execute(&nums(&["-1", "-1"])).unwrap(), d("0"));
        assert_eq!(sub.execute(&nums(&["10", "3", "2"])).unwrap(), d("5"));
    }

    #[test]
    fn multiply_execute() {
        let mul = MultiplyStrategy::new();
        assert_eq!(mul.execute(&nums(&["4", "2"])).unwrap(), d("8"));
        assert_eq!(mul.execute(&nums(&["0", "5"])).unwrap(), d("0"));
        assert_eq!(mul.execute(&nums(&["-2", "3"])).unwrap(), d("-6"));
    }

    #[test]
    fn divide_execute() {
        let div = DivideStrategy::new();
        assert_eq!(div.execute(&nums(&["10", "2"])).unwrap(), d("5"));
        assert_eq!(div.execute(&nums(&["0", "5"])).unwrap(), d("0"));
        assert_eq!(div.execute(&nums(&["7", "2"])).unwrap(), d("3.5"));
        assert_eq!(div.execute(&nums(&["100", "5", "2"])).unwrap(), d("10"));
    }

    #[test]
    fn divide_lenient_on_second_zero() {
        let div = DivideStrategy::new();
        assert_eq!(div.execute(&nums(&["10", "0"])).unwrap(), Decimal::ZERO);
        assert_eq!(div.execute(&nums(&["10"])).unwrap(), Decimal::ZERO);
        assert_eq!(div.execute(&[]).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn divide_zero_later_in_fold() {
        let div = DivideStrategy::new();
        let err = div.execute(&nums(&["10", "2", "0"])).unwrap_err();
        assert!(matches!(err, CalcError::DivideByZero));
    }

    #[test]
    fn empty_list_seeds() {
        assert_eq!(AddStrategy::new().execute(&[]).unwrap(), Decimal::ZERO);
        assert_eq!(MultiplyStrategy::new().execute(&[]).unwrap(), Decimal::ONE);
    }

    #[test]
    fn subtract_empty_is_error() {
        let err = SubtractStrategy::new().execute(&[]).unwrap_err();
        assert!(matches!(err, CalcError::EmptyOperands));
    }

    #[test]
    fn overflow_is_error() {
        let add = AddStrategy::new();
        let err = add.execute(&[Decimal::MAX, Decimal::ONE]).unwrap_err();
        assert!(matches!(err, CalcError::Overflow));

        let mul = MultiplyStrategy::new();
        let err = mul.execute(&[Decimal::MAX, Decimal::from(2)]).unwrap_err();
        assert!(matches!(err, CalcError::Overflow));

        let sub = SubtractStrategy::new();
        let err = sub.execute(&[Decimal::MIN, Decimal::ONE]).unwrap_err();
        assert!(matches!(err, CalcError::Overflow));
    }

    #[test]
    fn formulas() {
        assert_eq!(AddStrategy::new().formula(&nums(&["1", "2"])), "1+2");
        assert_eq!(SubtractStrategy::new().formula(&nums(&["5", "3"])), "5-3");
        assert_eq!(MultiplyStrategy::new().formula(&nums(&["4", "2"])), "4*2");
        assert_eq!(DivideStrategy::new().formula(&nums(&["10", "2"])), "10/2");
        assert_eq!(DivideStrategy::new().formula(&nums(&["7", "2"])), "7/2");
    }

    #[test]
    fn formula_keeps_written_scale() {
        assert_eq!(AddStrategy::new().formula(&nums(&["1.50", "2"])), "1.50+2");
        assert_eq!(SubtractStrategy::new().formula(&nums(&["-1", "-2"])), "-1--2");
    }

    #[test]
    fn add_formula_single_number() {
        assert_eq!(AddStrategy::new().formula(&nums(&["7"])), "7");
    }

    #[test]
    fn formula_empty_list() {
        for strategy in all_strategies() {
            assert_eq!(strategy.formula(&[]), "", "{}", strategy.name());
        }
    }

    #[test]
    fn operation_matches_name() {
        for strategy in all_strategies() {
            assert_eq!(strategy.operation().name(), strategy.name());
        }
    }
}
