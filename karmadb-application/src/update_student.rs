use super::*;

pub fn update_student(
    connections: &sqlite::Connections,
    account: &str,
    student_id: &str,
    update: usecases::NewStudent,
) -> Result<Student> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let account = usecases::authorize_account(conn, account)?;
        usecases::update_student(conn, &account, student_id, update).map_err(|err| {
            warn!("Failed to update student {}: {}", student_id, err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn update_student_fields() {
        let fixture = BackendFixture::new();
        let ada = fixture.create_student("S-0001", "Ada Lovelace");
        fixture.create_student("S-0002", "Grace Hopper");
        let update = |school_id: &str| usecases::NewStudent {
            school_id: school_id.into(),
            name: "Ada King".into(),
            faculty: "Science".into(),
            programme: "Mathematics".into(),
        };
        assert!(matches!(
            flows::update_student(&fixture.db_connections, ADMIN, ada.id.as_str(), update("S-0002"))
                .unwrap_err()
                .parameter(),
            Some(usecases::Error::StudentExists)
        ));
        let updated =
            flows::update_student(&fixture.db_connections, ADMIN, ada.id.as_str(), update("S-0001"))
                .unwrap();
        assert_eq!(ada.id, updated.id);
        assert_eq!("Ada King", updated.name);
        assert_eq!(Some(updated), fixture.try_get_student(ada.id.as_str()));
    }
}
