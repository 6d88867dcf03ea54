mod client {
    mod admin;
    mod helpers;
    mod payments;
    mod students;
}

mod error {
    mod portal_client;
    mod validation;
}
