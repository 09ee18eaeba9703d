mod instance;
mod item;

#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use item::Item;
