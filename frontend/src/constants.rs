pub static PROP_PLACEHOLDER: &'static str = "placeholder";
pub static PROP_TITLE: &'static str = "title";
pub static PROP_ROLE: &'static str = "role";
pub static PROP_NAME: &'static str = "name";
pub static PROP_TYPE: &'static str = "type";
pub static PROP_VALUE: &'static str = "value";
pub static PROP_SELECTED: &'static str = "selected";
pub static PROP_DISABLED: &'static str = "disabled";
pub static PROP_HREF: &'static str = "href";
pub static PROP_ID: &'static str = "id";

pub static TAG_DIV: &'static str = "div";
pub static TAG_SPAN: &'static str = "span";
pub static TAG_INPUT: &'static str = "input";
pub static TAG_BUTTON: &'static str = "button";
pub static TAG_OPTION: &'static str = "option";
pub static TAG_SELECT: &'static str = "select";
pub static TAG_FORM: &'static str = "form";
pub static TAG_LINK: &'static str = "a";

pub static STYLE_OPACITY: &'static str = "opacity";
pub static CLASS_HIDDEN: &'static str = "d-none";

pub static ID_LOGIN_BOX: &'static str = "login-box";
pub static ID_REGISTER_BOX: &'static str = "register-box";

pub static SELECTOR_SUBMIT: &'static str = "button[type=\"submit\"]";

pub static FIELD_LOGIN_EMAIL: &'static str = "login_email";
pub static FIELD_LOGIN_PASS: &'static str = "login_password";
pub static FIELD_FIRST_NAME: &'static str = "first_name";
pub static FIELD_LAST_NAME: &'static str = "last_name";
pub static FIELD_EMAIL: &'static str = "email";
pub static FIELD_COUNTRY: &'static str = "country";
pub static FIELD_REGION: &'static str = "state";
pub static FIELD_PASS: &'static str = "password";
pub static FIELD_PASS_CONFIRM: &'static str = "confirm_password";

pub static LABEL_LOGIN: &'static str = "Sign In";
pub static LABEL_REGISTER: &'static str = "Create Account";

pub static TITLE_LOGIN: &'static str = "Sign in";
pub static TITLE_REGISTER: &'static str = "Create account";
