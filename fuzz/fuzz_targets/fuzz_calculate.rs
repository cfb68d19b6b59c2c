#![no_main]

use libfuzzer_sys::fuzz_target;

use calculon_core::{
    CalcError, Calculator, CalculatorFactory, CalculatorOptions, DefaultFactory, OperationType,
    RawInput,
};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // First byte picks the operation and negative policy
    let Some((&selector, _)) = data.split_first() else {
        return;
    };
    let op = OperationType::ALL[usize::from(selector % 4)];
    let opts = CalculatorOptions::default().with_negatives_allowed(selector & 0x80 == 0);
    let calc = DefaultFactory::new().create(opts);

    let input = RawInput::new(text);
    let first = calc.calculate(&input, op);
    let second = calc.calculate(&input, op);
    assert_eq!(first, second, "calculation must be deterministic");

    match first {
        Ok(result) => assert!(result.formula.contains(" = ")),
        Err(CalcError::NoDelimiterStrategy | CalcError::UnsupportedOperation(_)) => {
            panic!("default calculator must accept every input and operation")
        }
        Err(_) => {}
    }
});
