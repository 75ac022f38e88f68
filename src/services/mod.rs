pub mod inclusion;
pub mod phase_resolver;
pub mod progress_engine;
pub mod template_generator;

pub use inclusion::InclusionResolver;
pub use phase_resolver::PhaseResolver;
pub use progress_engine::ProgressEngine;
pub use template_generator::TemplateGenerator;
