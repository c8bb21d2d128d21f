mod session;

pub use session::PlanSession;
