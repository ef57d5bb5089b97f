//! Markup of the registration page

use super::controller::ErrorBanner;
use crate::cards::Fragment;
use crate::cards::markup::escape_html;

/// Classes of the container the error banner is inserted before
pub const FORM_CONTAINER_CLASS: &str = "row justify-content-center";

/// The registration page as seen after the latest submission
#[derive(Debug, Clone, Copy)]
pub struct RegisterPage<'a> {
    banner: &'a ErrorBanner,
    username: &'a str,
    repeat_password_invalid: bool,
    login_path: &'a str,
}

impl<'a> RegisterPage<'a> {
    pub fn new(
        banner: &'a ErrorBanner,
        username: &'a str,
        repeat_password_invalid: bool,
        login_path: &'a str,
    ) -> Self {
        Self {
            banner,
            username,
            repeat_password_invalid,
            login_path,
        }
    }

    /// The banner element, or nothing when no error is displayed
    #[must_use]
    pub fn error_container(&self) -> String {
        self.banner
            .message()
            .map(|message| {
                format!(
                    "<div id=\"error-container\" class=\"alert alert-danger\">{}</div>",
                    escape_html(message)
                )
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn render(&self) -> Fragment {
        let repeat_class = if self.repeat_password_invalid {
            "form-control is-invalid"
        } else {
            "form-control"
        };

        Fragment::new(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Sign up | Weather Tracker</title>
    <link rel="stylesheet" href="/css/style.css">
</head>
<body>
<div class="container mt-5">
    {error_container}<div class="{FORM_CONTAINER_CLASS}">
        <div class="col-12 col-md-6 col-lg-4">
            <h2 class="mb-4">Sign up</h2>
            <form method="post" action="/register">
                <div class="mb-3">
                    <label for="username" class="form-label">Login</label>
                    <input type="text" class="form-control" id="username" name="username" value="{username}" required>
                </div>
                <div class="mb-3">
                    <label for="password" class="form-label">Password</label>
                    <input type="password" class="form-control" id="password" name="password" required>
                </div>
                <div class="mb-3">
                    <label for="repeat-password" class="form-label">Repeat password</label>
                    <input type="password" class="{repeat_class}" id="repeat-password" name="repeat-password" required>
                </div>
                <button type="submit" class="btn w-100">Sign up</button>
            </form>
            <p class="mt-3 text-center">Already registered? <a href="{login_path}">Sign in</a></p>
        </div>
    </div>
</div>
</body>
</html>
"#,
            error_container = self.error_container(),
            username = escape_html(self.username),
            login_path = escape_html(self.login_path),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_page_has_form_contract() {
        let banner = ErrorBanner::default();
        let page = RegisterPage::new(&banner, "", false, "/login").render().into_string();

        assert_eq!(page.matches("<form").count(), 1);
        assert!(page.contains("id=\"username\""));
        assert!(page.contains("id=\"password\""));
        assert!(page.contains("id=\"repeat-password\""));
        assert!(page.contains("<div class=\"row justify-content-center\">"));
        assert!(!page.contains("error-container"));
        assert!(!page.contains("is-invalid"));
    }

    #[test]
    fn test_banner_sits_right_before_form_container() {
        let mut banner = ErrorBanner::default();
        banner.display("Passwords don't match.");
        let page = RegisterPage::new(&banner, "alice", true, "/login").render().into_string();

        assert!(page.contains(
            "<div id=\"error-container\" class=\"alert alert-danger\">Passwords don&#39;t match.</div><div class=\"row justify-content-center\">"
        ));
        assert!(page.contains("class=\"form-control is-invalid\" id=\"repeat-password\""));
        assert!(page.contains("value=\"alice\""));
    }

    #[test]
    fn test_username_and_message_are_escaped() {
        let mut banner = ErrorBanner::default();
        banner.display("<b>nope</b>");
        let page = RegisterPage::new(&banner, "\"><script>", false, "/login").render();

        assert!(!page.as_str().contains("<script>"));
        assert!(page.as_str().contains("&lt;b&gt;nope&lt;/b&gt;"));
    }
}
