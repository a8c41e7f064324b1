use crate::error::AppError;
use axum::{http::StatusCode, response::Html};
use lazy_static::lazy_static;
use tera::{Context, Tera};

lazy_static! {
    static ref TEMPLATES: Tera = {
        let mut tera = Tera::default();
        tera.add_raw_templates([
            ("base.html", include_str!("templates/base.html")),
            ("card.html", include_str!("templates/card.html")),
            ("index.html", include_str!("templates/index.html")),
            ("all.html", include_str!("templates/all.html")),
            ("goal.html", include_str!("templates/goal.html")),
            ("profile.html", include_str!("templates/profile.html")),
            ("request.html", include_str!("templates/request.html")),
            ("request_done.html", include_str!("templates/request_done.html")),
            ("booking.html", include_str!("templates/booking.html")),
            ("booking_done.html", include_str!("templates/booking_done.html")),
            ("error.html", include_str!("templates/error.html")),
        ])
        .expect("Failed to load page templates");
        tera
    };
}

/// Renders a page template with the given context
pub fn render(name: &str, context: &Context) -> Result<Html<String>, AppError> {
    Ok(Html(TEMPLATES.render(name, context)?))
}

/// Renders the error page for a status code. Falls back to bare markup so an
/// error response never turns into another error.
pub fn error_page(status: StatusCode) -> Html<String> {
    let message = match status {
        StatusCode::NOT_FOUND => "Такой страницы у нас нет",
        _ => "Что-то пошло не так, попробуйте ещё раз",
    };

    let mut context = Context::new();
    context.insert("status", &status.as_u16());
    context.insert("message", message);

    match TEMPLATES.render("error.html", &context) {
        Ok(page) => Html(page),
        Err(err) => {
            log::error!("error page failed to render: {err}");
            Html(format!("<h1>{}</h1><p>{message}</p>", status.as_u16()))
        }
    }
}
