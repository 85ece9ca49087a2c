use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use tracing::info;

use super::html::Page;
use super::paths;

pub async fn index() -> Page {
    info!("processing {} route", paths::INDEX);
    Page::new("GPT Web App")
        .heading("About Page")
        .link(
            paths::ABOUT,
            "An about page which explains what this program does",
        )
        .heading("Team Page")
        .link(
            paths::TEAM,
            "A team page with a short bio of each member of the team and their role",
        )
        .heading("Form Page")
        .link(
            paths::FORM,
            concat!(
                "A form page for each team member which asks for some input, ",
                "calls GPT and shows the response"
            ),
        )
        .heading("GPT Demo")
        .link(paths::GPT_DEMO, "Ask GPT anything")
}

pub async fn about() -> Page {
    info!("processing {} route", paths::ABOUT);
    Page::new("About")
        .heading("About Page")
        .text(
            "This program reads formulas from the user and calculates the result. \
             It can also read a range of numbers from the user and show how many \
             prime numbers are within that range.",
        )
}

pub async fn team() -> Page {
    info!("processing {} route", paths::TEAM);
    Page::new("Team")
        .heading("Team Page")
        .markup("<ul>")
        .markup("<li>Yuxuan Xiong: CS major; leader of the team</li>")
        .markup("<li>Zone Zhang: CS major; member of the team</li>")
        .markup("</ul>")
}

pub async fn form() -> Page {
    info!("processing {} route", paths::FORM);
    Page::new("Forms")
        .heading("Zone Zhang - Calculate Formula")
        .link(paths::FORMULA, "Use GPT to calculate a formula")
        .heading("Yuxuan Xiong - Get The Number of Primes")
        .link(
            paths::GET_PRIME,
            "Use GPT to find the number of primes in a certain range",
        )
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    info!("no route for {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        Page::new("Not Found")
            .heading("Page Not Found")
            .text(&format!("Nothing lives at {}.", uri.path()))
            .link(paths::INDEX, "Back to the start page"),
    )
}
