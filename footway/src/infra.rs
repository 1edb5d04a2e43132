pub mod export;

#[doc(hidden)]
pub mod testing;

#[doc(hidden)]
#[cfg(feature = "proptest")]
pub mod proptest;

#[doc(hidden)]
#[cfg(feature = "arbitrary")]
pub mod arbitrary;
