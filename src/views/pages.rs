use crate::middleware::CurrentUser;
use crate::training::TrainingInfo;

use super::{escape, layout};

pub fn home(training: &TrainingInfo, current_user: &CurrentUser) -> String {
    let availability = if training.is_available {
        r#"<p class="banner">Now booking sessions!</p>"#
    } else {
        r#"<p class="banner">Sessions are currently full. Check back soon.</p>"#
    };

    let body = format!(
        r#"<h1>{name}</h1>
{availability}
<section class="locations">
  <h2>Where we train</h2>
  <p>{address_one}</p>
  <p>{address_two}</p>
  <p>Call us: {phone}</p>
</section>
<p><a href="/train">See available sessions</a></p>"#,
        name = escape(&training.name),
        availability = availability,
        address_one = escape(&training.address_one),
        address_two = escape(&training.address_two),
        phone = escape(&training.phone),
    );

    layout(&training.name, current_user, &body)
}

pub fn train(training: &TrainingInfo, current_user: &CurrentUser) -> String {
    let cards: String = training
        .sessions
        .iter()
        .map(|session| {
            format!(
                r#"<article class="session">
  <h2>{name}</h2>
  <p class="players">{players}</p>
  <p class="price">{price}</p>
  <p>{description}</p>
</article>
"#,
                name = escape(&session.name),
                players = escape(&session.players),
                price = session.price,
                description = escape(&session.description),
            )
        })
        .collect();

    let body = format!("<h1>Training Sessions</h1>\n{cards}");
    layout("Training | Dynamic Training", current_user, &body)
}
