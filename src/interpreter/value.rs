/// Function references.
///
/// Defines the [`Function`](callable::Function) trait implemented by every
/// registered function, and the [`Callable`](callable::Callable) handle that
/// carries one through evaluation.
pub mod callable;

pub mod core;
