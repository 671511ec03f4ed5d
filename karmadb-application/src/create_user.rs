use super::*;

pub fn create_user(connections: &sqlite::Connections, new_user: usecases::NewUser) -> Result<User> {
    let username = new_user.username.clone();
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_new_user(conn, new_user).map_err(|err| {
            warn!("Failed to create user {}: {}", username, err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn new_user(username: &str, password: &str) -> usecases::NewUser {
        usecases::NewUser {
            username: username.into(),
            password: password.into(),
            role: Role::Staff,
        }
    }

    #[test]
    fn create_staff_with_hashed_password() {
        let fixture = BackendFixture::new();
        let user = flows::create_user(&fixture.db_connections, new_user("alice", "secret"))
            .unwrap();
        let stored = fixture.try_get_user(user.id.as_str()).unwrap();
        assert_eq!(Role::Staff, stored.role);
        assert!(stored.password.verify("secret"));
        let hash: &str = stored.password.as_ref();
        assert_ne!("secret", hash);
    }

    #[test]
    fn reject_taken_username() {
        let fixture = BackendFixture::new();
        fixture.create_staff("alice");
        let err = flows::create_user(&fixture.db_connections, new_user("alice", "other1"))
            .unwrap_err();
        assert!(matches!(
            err.parameter(),
            Some(usecases::Error::UserExists)
        ));
    }

    #[test]
    fn reject_short_password() {
        let fixture = BackendFixture::new();
        let err =
            flows::create_user(&fixture.db_connections, new_user("alice", "123")).unwrap_err();
        assert!(matches!(err.parameter(), Some(usecases::Error::Password)));
    }
}
