//! Student entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_name: String,
    #[sea_orm(unique)]
    pub uid: String,
    pub branch: String,
    pub roll_no: i32,
    pub student_phone: String,
    pub parent_phone: String,
    pub year: i32,
    pub admission_year: i32,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::attendance_records::Entity")]
    AttendanceRecords,
}

impl Related<super::attendance_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::students::entities::{Branch, Student};
        use chrono::{DateTime, Utc};

        Student {
            id: self.id,
            student_name: self.student_name,
            // the column is constrained to the enumeration at write time
            branch: self.branch.parse::<Branch>().unwrap_or(Branch::CSE),
            uid: self.uid,
            roll_no: self.roll_no,
            student_phone: self.student_phone,
            parent_phone: self.parent_phone,
            year: self.year,
            admission_year: self.admission_year,
            is_active: self.is_active,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }

    pub fn into_summary(self) -> crate::models::attendance::entities::StudentSummary {
        use crate::models::attendance::entities::StudentSummary;
        use crate::models::students::entities::Branch;

        StudentSummary {
            id: self.id,
            student_name: self.student_name,
            uid: self.uid,
            roll_no: self.roll_no,
            branch: self.branch.parse::<Branch>().unwrap_or(Branch::CSE),
            year: self.year,
        }
    }
}
