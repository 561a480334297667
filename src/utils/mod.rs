mod parser;
pub use self::parser::*;

mod random;
pub use self::random::*;

mod serializer;
pub use self::serializer::*;
