use super::prelude::*;

pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

// Unknown users and wrong passwords are indistinguishable for the caller.
pub fn login_with_username<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    match repo.try_get_user_by_username(login.username)? {
        Some(user) if user.password.verify(login.password) => Ok(user),
        _ => Err(Error::Credentials),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        super::{create_new_user, tests::MockDb, NewUser},
        *,
    };

    #[test]
    fn login() {
        let db = MockDb::default();
        create_new_user(
            &db,
            NewUser {
                username: "alice".into(),
                password: "secret".into(),
                role: Role::Staff,
            },
        )
        .unwrap();
        let ok = Credentials {
            username: "alice",
            password: "secret",
        };
        assert_eq!("alice", login_with_username(&db, &ok).unwrap().username);
        let wrong_password = Credentials {
            username: "alice",
            password: "secrets",
        };
        assert!(matches!(
            login_with_username(&db, &wrong_password),
            Err(Error::Credentials)
        ));
        let unknown = Credentials {
            username: "bob",
            password: "secret",
        };
        assert!(matches!(
            login_with_username(&db, &unknown),
            Err(Error::Credentials)
        ));
    }
}
