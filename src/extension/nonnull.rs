use std::ptr::NonNull;

/// Return a byte pointer to the first element of `data`.
///
/// The pointer is dangling (but non-null and aligned for `T`) if `data` is
/// empty.
#[inline]
pub(crate) fn nonnull_from_slice_data<T>(data: &[T]) -> NonNull<u8>
{
    NonNull::from(data).cast::<u8>()
}

/// Converts `ptr` to `NonNull<u8>`, or `None` if it is null.
#[inline]
pub(crate) fn nonnull_from_ptr(ptr: *const u8) -> Option<NonNull<u8>>
{
    NonNull::new(ptr as *mut u8)
}
