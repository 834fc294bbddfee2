mod common;
mod test_auth;
mod test_dispatch;
