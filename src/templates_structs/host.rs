use askama::Template;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub presentations: Vec<String>,
    pub csrf_token: String,
}

/// Host control page. `position` is one-based for display.
#[derive(Template)]
#[template(path = "host.html")]
pub struct HostTemplate {
    pub presentation: String,
    pub position: usize,
    pub total_slides: usize,
    pub csrf_token: String,
}
