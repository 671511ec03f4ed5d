use super::prelude::*;
use crate::{
    authorization::user::authorize_role,
    util::validate::{AutoCorrect, Validate},
};

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub school_id : String,
    pub name      : String,
    pub faculty   : String,
    pub programme : String,
}

impl NewStudent {
    pub(crate) fn into_student(self, id: Id) -> Student {
        let NewStudent {
            school_id,
            name,
            faculty,
            programme,
        } = self;
        Student {
            id,
            school_id,
            name,
            faculty,
            programme,
        }
        .auto_correct()
    }
}

pub fn create_student<R: StudentRepo>(
    repo: &R,
    account: &User,
    new_student: NewStudent,
) -> Result<Student> {
    authorize_role(account, Role::Admin)?;
    let student = new_student.into_student(Id::new());
    student.validate()?;
    if repo
        .try_get_student_by_school_id(&student.school_id)?
        .is_some()
    {
        return Err(Error::StudentExists);
    }
    log::debug!("Creating new student {}", student.school_id);
    repo.create_student(&student)?;
    Ok(student)
}
