mod results;
pub use results::ResultsPage;

mod scan;
pub use scan::Scan;
