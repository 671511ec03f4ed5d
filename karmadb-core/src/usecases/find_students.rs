use super::prelude::*;

pub fn get_student<R: StudentRepo>(repo: &R, id: &str) -> Result<Student> {
    repo.try_get_student(id)?.ok_or(Error::UnknownStudent)
}

pub fn get_student_by_school_id<R: StudentRepo>(repo: &R, school_id: &str) -> Result<Student> {
    repo.try_get_student_by_school_id(school_id)?
        .ok_or(Error::UnknownStudent)
}

/// Resolves a reference that is either an id or a school id.
pub fn get_student_by_id_or_school_id<R: StudentRepo>(repo: &R, id: &str) -> Result<Student> {
    if let Some(student) = repo.try_get_student(id)? {
        return Ok(student);
    }
    get_student_by_school_id(repo, id)
}

pub fn find_students_by_name<R: StudentRepo>(repo: &R, name: &str) -> Result<Vec<Student>> {
    Ok(repo.find_students_by_name(name.trim())?)
}

pub fn all_students<R: StudentRepo>(repo: &R) -> Result<Vec<Student>> {
    Ok(repo.all_students()?)
}

/// Students whose id, school id or name matches the query.
pub fn search_students<R: StudentRepo>(repo: &R, query: &str) -> Result<Vec<Student>> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(vec![]);
    }
    let mut results: Vec<Student> = Vec::new();
    let by_id = repo.try_get_student(query)?;
    let by_school_id = repo.try_get_student_by_school_id(query)?;
    let by_name = repo.find_students_by_name(query)?;
    for student in by_id.into_iter().chain(by_school_id).chain(by_name) {
        if !results.iter().any(|s| s.id == student.id) {
            results.push(student);
        }
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use karmadb_entities::builders::*;

    fn setup() -> (MockDb, Student, Student) {
        let db = MockDb::default();
        let a = Student::build()
            .school_id("816000001")
            .name("Jane Doe")
            .finish();
        let b = Student::build()
            .school_id("816000002")
            .name("John Doe")
            .finish();
        db.create_student(&a).unwrap();
        db.create_student(&b).unwrap();
        (db, a, b)
    }

    #[test]
    fn search_by_id_school_id_and_name() {
        let (db, a, b) = setup();
        assert_eq!(vec![a.clone()], search_students(&db, a.id.as_str()).unwrap());
        assert_eq!(vec![b.clone()], search_students(&db, "816000002").unwrap());
        assert_eq!(vec![a.clone()], search_students(&db, " jane doe ").unwrap());
        assert!(search_students(&db, "Doe").unwrap().is_empty());
        assert!(search_students(&db, "").unwrap().is_empty());
    }

    #[test]
    fn resolve_id_or_school_id() {
        let (db, a, _) = setup();
        assert_eq!(a, get_student_by_id_or_school_id(&db, a.id.as_str()).unwrap());
        assert_eq!(a, get_student_by_id_or_school_id(&db, "816000001").unwrap());
        assert!(matches!(
            get_student_by_id_or_school_id(&db, "unknown"),
            Err(Error::UnknownStudent)
        ));
    }
}
