mod commands {
    mod admin;
    mod helpers;
    mod payment;
    mod student;
}
