use html_escape::encode_text;

use super::Icons;

pub(super) fn spinner(icons: &Icons) -> String {
    format!(
        r#"
    <div class="spinner">
      <svg>
        <use href="{}"></use>
      </svg>
    </div>
  "#,
        icons.href("loader")
    )
}

pub(super) fn error(icons: &Icons, message: &str) -> String {
    notice("error", &icons.href("alert-triangle"), message)
}

pub(super) fn message(icons: &Icons, message: &str) -> String {
    notice("message", &icons.href("smile"), message)
}

fn notice(class: &str, icon: &str, message: &str) -> String {
    format!(
        r#"
      <div class="{class}">
        <div>
          <svg>
            <use href="{icon}"></use>
          </svg>
        </div>
        <p>{}</p>
      </div>
    "#,
        encode_text(message)
    )
}
