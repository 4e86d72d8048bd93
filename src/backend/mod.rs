//! Backend module - Source synthesis, compilation and packaging

pub mod archive;
pub mod compiler;
pub mod synth;
pub mod workspace;

pub use archive::JarWriter;
pub use compiler::{CompileOutcome, Compiler, Javac};
pub use synth::{synthesize, GeneratedUnit};
pub use workspace::BuildWorkspace;
