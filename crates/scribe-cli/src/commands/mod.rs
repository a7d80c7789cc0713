mod annotate_ops;
mod corrections_ops;
mod lesson_ops;
mod separate_ops;
mod vocab_ops;

pub use annotate_ops::annotate;
pub use corrections_ops::corrections_check;
pub use lesson_ops::{lesson_export, lesson_import};
pub use separate_ops::separate;
pub use vocab_ops::vocab_export;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub(crate) use die;
