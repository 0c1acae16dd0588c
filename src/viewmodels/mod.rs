pub mod dispatcher;
pub mod auth_viewmodel;
pub mod activities_viewmodel;
pub mod blood_requirements_viewmodel;
pub mod attendance_viewmodel;
pub mod volunteers_viewmodel;

pub use dispatcher::{dispatch, Action};
pub use auth_viewmodel::AuthViewModel;
pub use activities_viewmodel::ActivitiesViewModel;
pub use blood_requirements_viewmodel::BloodRequirementsViewModel;
pub use attendance_viewmodel::AttendanceViewModel;
pub use volunteers_viewmodel::VolunteersViewModel;
