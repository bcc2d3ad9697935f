mod adjustment;
mod locale;
mod raw_input;
mod validated_input;

pub use adjustment::AdjustmentResult;
pub use locale::CurrencyLocale;
pub use raw_input::RawFormInput;
pub use validated_input::ValidatedInput;
