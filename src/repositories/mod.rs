pub(crate) mod courses;
pub(crate) mod enrollments;
pub(crate) mod lectures;
pub(crate) mod modules;
pub(crate) mod submissions;
pub(crate) mod users;
