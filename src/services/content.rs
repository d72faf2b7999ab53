use crate::domain::{GameRecord, GeneratedContent};
use crate::services::metrics;

/// Renders the full game page copy from a [`GameRecord`]. Pure and
/// deterministic: the same record always produces byte-identical output.
pub fn generate(game: &GameRecord) -> GeneratedContent {
    let intro = introduction(game);
    let features = features_section(game);
    let how_to_play = how_to_play(game);
    let faq = faq(game);

    let content = format!(
        "<div class=\"game-content\">\n{intro}{features}{how_to_play}{faq}</div>\n"
    );

    let word_count = metrics::word_count(&content);
    let keyword_density = metrics::keyword_density(&content, &game.name);

    GeneratedContent {
        title: format!(
            "{} - Free Online {} Game",
            game.name, game.seo_content.category
        ),
        description: game.description.clone(),
        content,
        word_count,
        keyword_density,
    }
}

fn introduction(game: &GameRecord) -> String {
    let name = &game.name;
    let category = game.seo_content.category.to_lowercase();
    let description = &game.description;

    format!(
        "<section class=\"game-intro\">\n\
         <h1>{name} - Play Free Online</h1>\n\
         <p>Welcome to {name}, an exciting {category} game that brings {description} \
         Experience the thrill of {name} directly in your browser without any downloads \
         required.</p>\n\
         <p>{name} offers an immersive gaming experience with cutting-edge graphics and \
         engaging gameplay mechanics. This free online game has been designed to provide \
         hours of entertainment for players of all skill levels. Whether you're a casual \
         gamer or a hardcore enthusiast, {name} delivers the perfect blend of challenge \
         and fun.</p>\n\
         <p>Join thousands of players worldwide who have already discovered the excitement \
         of {name}. The game features intuitive controls, stunning visuals, and addictive \
         gameplay that will keep you coming back for more. Start your adventure today and \
         see why {name} has become one of the most popular online games.</p>\n\
         </section>\n"
    )
}

fn features_section(game: &GameRecord) -> String {
    let name = &game.name;
    // An empty features list still renders the section with an empty list.
    let items: String = game
        .seo_content
        .features
        .iter()
        .map(|feature| {
            format!("<li><strong>{feature}</strong>: Experience this amazing feature in {name}</li>\n")
        })
        .collect();

    format!(
        "<section class=\"game-features\">\n\
         <h2>Why Choose {name}?</h2>\n\
         <p>{name} stands out from other online games with its unique features and \
         exceptional gameplay quality. Here's what makes this game special:</p>\n\
         <ul class=\"features-list\">\n{items}</ul>\n\
         <p>These features make {name} the perfect choice for anyone looking for \
         high-quality online entertainment. The combination of innovative gameplay \
         mechanics and polished presentation ensures that every gaming session with \
         {name} is memorable and engaging.</p>\n\
         </section>\n"
    )
}

fn how_to_play(game: &GameRecord) -> String {
    let name = &game.name;
    let category = game.seo_content.category.to_lowercase();

    format!(
        "<section class=\"how-to-play\">\n\
         <h2>How to Play {name}</h2>\n\
         <p>Getting started with {name} is easy and straightforward. Follow these simple \
         steps to begin your gaming adventure:</p>\n\
         <h3>Getting Started</h3>\n\
         <ol>\n\
         <li>Click the \"Play Now\" button above to load {name}</li>\n\
         <li>Wait for the game to fully load in your browser</li>\n\
         <li>Follow the on-screen instructions to learn the basic controls</li>\n\
         <li>Start playing and enjoy the {category} experience</li>\n\
         </ol>\n\
         <h3>Game Controls</h3>\n\
         <p>{name} features intuitive controls that are easy to learn but challenging to \
         master. The game responds to both keyboard and mouse inputs, providing a smooth \
         and responsive gaming experience. The control scheme has been carefully designed \
         to be accessible for new players while offering depth for experienced gamers.</p>\n\
         <h3>Tips for Success</h3>\n\
         <p>To excel in {name}, practice regularly and experiment with different \
         strategies. The game rewards skill and creativity, so don't be afraid to try new \
         approaches to overcome challenges. Pay attention to the game's physics and \
         mechanics, as understanding these systems will give you a significant advantage \
         over other players.</p>\n\
         <p>Remember that {name} is designed to be fun above all else. Don't get \
         discouraged if you don't master everything immediately - the joy is in the \
         learning process and the exciting moments that emerge from dynamic gameplay.</p>\n\
         </section>\n"
    )
}

fn faq(game: &GameRecord) -> String {
    let name = &game.name;
    let category = game.seo_content.category.to_lowercase();

    let entries = [
        (
            format!("Is {name} free to play?"),
            format!(
                "Yes, {name} is completely free to play. You can enjoy the full game \
                 experience without any cost or hidden fees. There are no premium \
                 subscriptions or pay-to-win elements - everyone has access to the same \
                 great gameplay."
            ),
        ),
        (
            format!("Do I need to download anything to play {name}?"),
            format!(
                "No downloads are required. {name} runs directly in your web browser, \
                 making it instantly accessible on any device with an internet \
                 connection. This browser-based approach means you can start playing \
                 immediately without waiting for installations or updates."
            ),
        ),
        (
            format!("What devices can run {name}?"),
            format!(
                "{name} is compatible with most modern devices including desktop \
                 computers, laptops, tablets, and smartphones. The game automatically \
                 adjusts to your screen size for the best experience. We recommend using \
                 a recent version of Chrome, Firefox, Safari, or Edge for optimal \
                 performance."
            ),
        ),
        (
            format!("How do I save my progress in {name}?"),
            format!(
                "Your game progress in {name} is automatically saved in your browser's \
                 local storage. You can continue playing from where you left off when \
                 you return to the game. For the best experience, we recommend using the \
                 same browser and device for consistent progress tracking."
            ),
        ),
        (
            format!("Can I play {name} offline?"),
            format!(
                "{name} requires an internet connection to play initially. This ensures \
                 you always have access to the latest features and updates. Some game \
                 content may be cached in your browser for improved loading times on \
                 subsequent visits."
            ),
        ),
        (
            format!("Is {name} suitable for all ages?"),
            format!(
                "{name} is designed to be family-friendly and suitable for players of \
                 all ages. The game features {category} gameplay that is engaging \
                 without being overly complex or containing inappropriate content."
            ),
        ),
    ];

    let items: String = entries
        .iter()
        .map(|(question, answer)| {
            format!(
                "<div class=\"faq-item\">\n<h3>{question}</h3>\n<p>{answer}</p>\n</div>\n"
            )
        })
        .collect();

    format!(
        "<section class=\"faq\">\n\
         <h2>Frequently Asked Questions</h2>\n\
         {items}\
         </section>\n"
    )
}

/// Short-form copy for quick previews: heading, description, feature list
/// and a one-line how-to.
pub fn simple_content(game: &GameRecord) -> String {
    let name = &game.name;
    let items: String = game
        .seo_content
        .features
        .iter()
        .map(|feature| format!("<li>{feature}</li>\n"))
        .collect();

    format!(
        "<div class=\"simple-game-content\">\n\
         <h1>{name} - Play Free Online</h1>\n\
         <p>{description}</p>\n\
         <h2>Game Features</h2>\n\
         <ul>\n{items}</ul>\n\
         <h2>How to Play</h2>\n\
         <p>Click the play button above to start {name}. Use your keyboard and mouse to \
         control the game.</p>\n\
         <p>Enjoy playing {name} for free in your browser!</p>\n\
         </div>\n",
        description = game.description
    )
}
