use super::*;

impl<'a> StudentRepo for DbReadOnly<'a> {
    fn create_student(&self, _student: &Student) -> Result<()> {
        unreachable!();
    }
    fn update_student(&self, _student: &Student) -> Result<()> {
        unreachable!();
    }
    fn delete_student(&self, _id: &str) -> Result<()> {
        unreachable!();
    }

    fn all_students(&self) -> Result<Vec<Student>> {
        all_students(&mut self.conn.borrow_mut())
    }
    fn count_students(&self) -> Result<usize> {
        count_students(&mut self.conn.borrow_mut())
    }

    fn get_student(&self, id: &str) -> Result<Student> {
        get_student(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_student_by_school_id(&self, school_id: &str) -> Result<Option<Student>> {
        try_get_student_by_school_id(&mut self.conn.borrow_mut(), school_id)
    }
    fn find_students_by_name(&self, name: &str) -> Result<Vec<Student>> {
        find_students_by_name(&mut self.conn.borrow_mut(), name)
    }
}

impl<'a> StudentRepo for DbConnection<'a> {
    fn create_student(&self, student: &Student) -> Result<()> {
        create_student(&mut self.conn.borrow_mut(), student)
    }
    fn update_student(&self, student: &Student) -> Result<()> {
        update_student(&mut self.conn.borrow_mut(), student)
    }
    fn delete_student(&self, id: &str) -> Result<()> {
        delete_student(&mut self.conn.borrow_mut(), id)
    }

    fn all_students(&self) -> Result<Vec<Student>> {
        all_students(&mut self.conn.borrow_mut())
    }
    fn count_students(&self) -> Result<usize> {
        count_students(&mut self.conn.borrow_mut())
    }

    fn get_student(&self, id: &str) -> Result<Student> {
        get_student(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_student_by_school_id(&self, school_id: &str) -> Result<Option<Student>> {
        try_get_student_by_school_id(&mut self.conn.borrow_mut(), school_id)
    }
    fn find_students_by_name(&self, name: &str) -> Result<Vec<Student>> {
        find_students_by_name(&mut self.conn.borrow_mut(), name)
    }
}

fn create_student(conn: &mut SqliteConnection, s: &Student) -> Result<()> {
    let new_student = models::NewStudent::from(s);
    let _count = diesel::insert_into(schema::students::table)
        .values(&new_student)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn update_student(conn: &mut SqliteConnection, s: &Student) -> Result<()> {
    use schema::students::dsl;
    let new_student = models::NewStudent::from(s);
    let count = diesel::update(dsl::students.filter(dsl::id.eq(new_student.id)))
        .set(&new_student)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_student(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::students::dsl;
    let count = diesel::delete(dsl::students.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_deletion(count)
}

fn get_student(conn: &mut SqliteConnection, id: &str) -> Result<Student> {
    use schema::students::dsl;
    Ok(dsl::students
        .filter(dsl::id.eq(id))
        .first::<models::StudentEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn try_get_student_by_school_id(
    conn: &mut SqliteConnection,
    school_id: &str,
) -> Result<Option<Student>> {
    use schema::students::dsl;
    Ok(dsl::students
        .filter(dsl::school_id.eq(school_id))
        .first::<models::StudentEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn find_students_by_name(conn: &mut SqliteConnection, name: &str) -> Result<Vec<Student>> {
    use schema::students::dsl;
    Ok(dsl::students
        .filter(lower(dsl::name).eq(lower(name)))
        .order_by(dsl::school_id)
        .load::<models::StudentEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn all_students(conn: &mut SqliteConnection) -> Result<Vec<Student>> {
    use schema::students::dsl;
    Ok(dsl::students
        .order_by(dsl::school_id)
        .load::<models::StudentEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_students(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::students::dsl;
    Ok(dsl::students
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
