pub mod assignment;
pub mod course_outline;
pub mod module;
pub mod quiz;
pub mod subject;
pub mod user;
pub mod video;

pub use assignment::Entity as Assignment;
pub use course_outline::Entity as CourseOutline;
pub use module::Entity as Module;
pub use quiz::Entity as Quiz;
pub use subject::Entity as Subject;
pub use user::Entity as User;
pub use video::Entity as Video;
