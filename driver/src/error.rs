use kernel::KernelError;

/// Converts driver-level errors into `KernelError` reports so nothing
/// database-specific leaks past this crate.
pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}
