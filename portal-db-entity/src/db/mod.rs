pub mod college;
pub mod course;
pub mod offer;
pub mod scholarship;
pub mod sea_orm_active_enums;
pub mod student;
