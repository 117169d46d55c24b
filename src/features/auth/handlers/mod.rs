pub mod auth_handler;

pub use auth_handler::{
    __path_get_me, __path_login, __path_signup, __path_update_password, get_me, login, signup,
    update_password,
};
