use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use serde::Deserialize;
use tracing::info;

use super::error::WebError;
use super::html::Page;
use super::paths;
use super::server::AppState;
use crate::domain::{Query, QueryMode};

const PROMPT_FORM: &str = r#"<form method="post">
    <textarea name="prompt"></textarea>
    <p><input type="submit" value="get response"></p>
</form>"#;

const PROMPT_STYLE: &str = "background-color:yellow";
const ANSWER_STYLE: &str = "border:thin solid black";

#[derive(Debug, Deserialize)]
pub struct PromptForm {
    pub prompt: String,
}

/// Visible wording for each interactive page.
struct PageCopy {
    title: &'static str,
    intro: &'static str,
    result_heading: &'static str,
    noun: &'static str,
    again: &'static str,
}

fn copy(mode: QueryMode) -> PageCopy {
    match mode {
        QueryMode::Generic => PageCopy {
            title: "GPT Demo App",
            intro: "Enter your query below",
            result_heading: "GPT Demo",
            noun: "answer",
            again: "make another query",
        },
        QueryMode::Formula => PageCopy {
            title: "Calculate Formula",
            intro: "Please enter a formula, we will calculate the result for you!",
            result_heading: "Calculate Formula",
            noun: "result",
            again: "Do you want to find the result of another formula?",
        },
        QueryMode::Prime => PageCopy {
            title: "Get The Number of Primes in a Certain Range",
            intro: concat!(
                "Please enter a range, we will help you find how many prime numbers ",
                "are inside it"
            ),
            result_heading: "Get The Number of Primes in a Certain Range",
            noun: "answer",
            again: "make another query",
        },
    }
}

pub async fn show_form(mode: QueryMode) -> Page {
    info!("processing GET {} route", paths::form_path(mode));
    let copy = copy(mode);

    Page::new(copy.title)
        .heading(copy.title)
        .text(copy.intro)
        .markup(PROMPT_FORM)
}

pub async fn submit(
    mode: QueryMode,
    State(state): State<AppState>,
    form: Result<Form<PromptForm>, FormRejection>,
) -> Result<Page, WebError> {
    info!("processing POST {} route", paths::form_path(mode));

    let Form(form) = form.map_err(|rejection| {
        WebError::bad_request(mode, format!("missing or malformed 'prompt' field: {rejection}"))
    })?;

    let query = Query::new(form.prompt, mode).map_err(|e| WebError::from_domain(mode, e))?;
    let answer = state
        .container()
        .ask_use_case()
        .map_err(|e| WebError::from_domain(mode, e))?
        .execute(&query)
        .await
        .map_err(|e| WebError::from_domain(mode, e))?;

    Ok(render_answer(&query, &answer))
}

fn render_answer(query: &Query, answer: &str) -> Page {
    let copy = copy(query.mode());

    Page::new(copy.result_heading)
        .heading(copy.result_heading)
        .preformatted(PROMPT_STYLE, query.prompt())
        .markup("<hr>")
        .text(&format!("Here is the {} in text mode:", copy.noun))
        .block(ANSWER_STYLE, answer)
        .text(&format!("Here is the {} in \"pre\" mode:", copy.noun))
        .preformatted(ANSWER_STYLE, answer)
        .link(paths::form_path(query.mode()), copy.again)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_is_rendered_twice() {
        let query = Query::generic("hello").unwrap();
        let html = render_answer(&query, "hi").render();

        assert!(html.contains(r#"<div style="border:thin solid black">hi</div>"#));
        assert!(html.contains(r#"<pre style="border:thin solid black">hi</pre>"#));
        assert!(html.contains(r#"<a href="/gptdemo">make another query</a>"#));
    }

    #[test]
    fn test_answer_and_prompt_are_escaped() {
        let query = Query::formula("1 < 2").unwrap();
        let html = render_answer(&query, "<script>x</script>").render();

        assert!(html.contains("1 &lt; 2"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Here is the result in text mode:"));
    }

    #[tokio::test]
    async fn test_form_has_single_prompt_field() {
        for mode in QueryMode::all() {
            let html = show_form(mode).await.render();
            assert_eq!(html.matches("<textarea").count(), 1);
            assert!(html.contains(r#"name="prompt""#));
            assert!(html.contains(r#"method="post""#));
        }
    }
}
