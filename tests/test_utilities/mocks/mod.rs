/// Mock implementations for testing
mod mock_output_presenter;
mod mock_payload_reader;
mod mock_progress_reporter;

#[allow(unused_imports)]
pub use mock_output_presenter::MockOutputPresenter;
#[allow(unused_imports)]
pub use mock_payload_reader::MockPayloadReader;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
