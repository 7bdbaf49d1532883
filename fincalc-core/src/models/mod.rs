mod field;
mod input_mode;

pub use field::{FieldKind, FieldSpec, RawValue};
pub use input_mode::InputMode;
