///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        username -> Text,
        password -> Text,
        role -> SmallInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Students
///////////////////////////////////////////////////////////////////////

table! {
    students (rowid) {
        rowid -> BigInt,
        id -> Text,
        school_id -> Text,
        name -> Text,
        faculty -> Text,
        programme -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Reviews
///////////////////////////////////////////////////////////////////////

table! {
    reviews (rowid) {
        rowid -> BigInt,
        id -> Text,
        author_rowid -> BigInt,
        student_rowid -> BigInt,
        created_at -> BigInt,
        text -> Text,
        rating -> SmallInt,
    }
}

joinable!(reviews -> users (author_rowid));
joinable!(reviews -> students (student_rowid));

///////////////////////////////////////////////////////////////////////
// Votes
///////////////////////////////////////////////////////////////////////

table! {
    votes (rowid) {
        rowid -> BigInt,
        id -> Text,
        staff_rowid -> BigInt,
        review_rowid -> BigInt,
        polarity -> SmallInt,
        created_at -> BigInt,
    }
}

joinable!(votes -> users (staff_rowid));
joinable!(votes -> reviews (review_rowid));

allow_tables_to_appear_in_same_query!(users, students, reviews, votes);
