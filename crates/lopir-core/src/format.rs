//! Wire format of the low-level instruction text.
//!
//! A separate runtime parses these lines positionally, so every constant and
//! rendering rule here is part of an external contract and must stay
//! byte-exact:
//!
//! ```text
//! <ExecType>°<opcode>°<label>·<DATATYPE>·<VALUETYPE>°…°<out>·<DATATYPE>·<VALUETYPE>
//! ```

use crate::types::{DataType, ValueType};

/// Separates operands within one instruction line.
pub const OPERAND_DELIMITER: &str = "\u{00b0}"; // °

/// Introduces the data-type tag of an operand descriptor.
pub const DATATYPE_PREFIX: &str = "\u{00b7}"; // ·

/// Introduces the value-type tag of an operand descriptor.
pub const VALUETYPE_PREFIX: &str = "\u{00b7}"; // ·

/// Symmetric marker around labels whose value is only bound at execution
/// time; the runtime substitutes the resolved value before interpreting.
pub const VARIABLE_PLACEHOLDER: &str = "##";

/// Render one operand descriptor: `label·DATATYPE·VALUETYPE`.
pub fn operand(label: &str, data_type: DataType, value_type: ValueType) -> String {
    format!(
        "{}{}{}{}{}",
        label, DATATYPE_PREFIX, data_type, VALUETYPE_PREFIX, value_type
    )
}

/// Wrap a label in the deferred-binding placeholder.
pub fn deferred(label: &str) -> String {
    format!(
        "{}{}{}",
        VARIABLE_PLACEHOLDER, label, VARIABLE_PLACEHOLDER
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_descriptor_shape() {
        assert_eq!(
            operand("X", DataType::Matrix, ValueType::Double),
            "X\u{00b7}MATRIX\u{00b7}DOUBLE"
        );
    }

    #[test]
    fn deferred_marker_is_symmetric() {
        assert_eq!(deferred("ord1"), "##ord1##");
    }
}
