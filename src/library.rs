//! Story library - A title-keyed collection of stories and the built-in story

use crate::domain::action::Action;
use crate::domain::errors::DomainError;
use crate::domain::link::Link;
use crate::domain::passage::Passage;
use crate::domain::story::Story;
use crate::domain::value_objects::ImageHandle;
use std::collections::HashMap;

pub const TROLL_ADVENTURE: &str = "Troll Adventure";

/// Stories available to play, keyed by title
#[derive(Debug, Clone, Default)]
pub struct StoryLibrary {
    stories: HashMap<String, Story>,
}

impl StoryLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// A library holding the built-in stories
    pub fn with_builtin_stories() -> Result<Self, DomainError> {
        let mut library = Self::new();
        library.insert(troll_adventure()?);
        Ok(library)
    }

    /// Add a story, returning the story it replaced, if any
    pub fn insert(&mut self, story: Story) -> Option<Story> {
        self.stories.insert(story.title().to_string(), story)
    }

    pub fn get(&self, title: &str) -> Option<&Story> {
        self.stories.get(title)
    }

    pub fn remove(&mut self, title: &str) -> Option<Story> {
        self.stories.remove(title)
    }

    /// Titles of every story, sorted
    pub fn titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self.stories.keys().map(String::as_str).collect();
        titles.sort_unstable();
        titles
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}

fn passage(title: &str, content: &str, image: &str) -> Result<Passage, DomainError> {
    let mut passage = Passage::new(title, content)?;
    passage.set_background_image(ImageHandle::from(format!(
        "images/stories/troll_adventure/{image}.png"
    )));
    Ok(passage)
}

fn ending(title: &str, content: &str, image: &str) -> Result<Passage, DomainError> {
    let mut passage = passage(title, content, image)?;
    passage.set_ending_passage(true);
    Ok(passage)
}

/// Build the "Troll Adventure" story that ships with the engine
///
/// Fails if the story would contain broken links.
pub fn troll_adventure() -> Result<Story, DomainError> {
    let mut bridge = passage(
        "Bridge",
        "You start your quest by walking over a bridge, when suddenly...",
        "opening",
    )?;
    bridge.add_link(Link::with_actions(
        "Continue",
        "Troll",
        vec![
            Action::add_to_inventory("Sword")?,
            Action::add_to_inventory("Magic Grimoire")?,
        ],
    )?);

    let run_away = Link::with_actions("Run away", "Run Away", vec![Action::reduce_health(100)?])?;
    let attack = Link::with_actions("Attack the troll", "Attack", vec![Action::add_score(100)?])?;
    let failed = Link::new("Continue", "Defeat")?;
    let succeeded = Link::new("Continue", "Victory")?;

    let mut troll = passage(
        "Troll",
        "You come face to face with a fearsome troll. Your sword and your magic grimoire are ready.",
        "you_see_troll",
    )?;
    troll.add_link(Link::new("Continue", "Choice")?);

    let mut choice = passage("Choice", "What will you do?", "you_see_troll")?;
    choice.add_all_links([
        Link::with_actions("Talk to the troll", "Talk", vec![Action::add_score(50)?])?,
        attack.clone(),
        run_away.clone(),
    ])?;

    let mut talk = passage(
        "Talk",
        "How do you want to talk to the troll?",
        "talk_to_troll",
    )?;
    talk.add_all_links([
        Link::with_actions("Say hello", "Hello", vec![Action::reduce_health(100)?])?,
        Link::with_actions("Blow a kiss", "Kiss", vec![Action::add_score(100)?])?,
    ])?;

    let mut hello = passage(
        "Hello",
        "The troll does not understand what you say and attacks you.",
        "say_hello",
    )?;
    hello.add_link(failed.clone());

    let mut kiss = passage(
        "Kiss",
        "The troll is surprised and moves closer to you.",
        "blow_kiss",
    )?;
    kiss.add_all_links([
        Link::with_actions("Kiss the troll", "Friendship", vec![Action::add_score(100)?])?,
        attack,
    ])?;

    let mut friendship = passage(
        "Friendship",
        "The troll kisses you back and invites you to her house.",
        "kiss_troll",
    )?;
    friendship.add_all_links([
        Link::with_actions(
            "Accept the invitation",
            "Feast",
            vec![Action::add_gold(1000)?, Action::add_score(300)?],
        )?,
        run_away,
    ])?;

    let mut feast = passage(
        "Feast",
        "You share a feast with the troll, who rewards your company with 1000 gold coins. You receive 300 points.",
        "try_to_make_love",
    )?;
    feast.add_link(succeeded.clone());

    let mut attack_troll = passage(
        "Attack",
        "How do you want to attack the troll?",
        "attack_troll",
    )?;
    attack_troll.add_all_links([
        Link::with_actions(
            "Use your sword",
            "Sword",
            vec![Action::reduce_health(100)?, Action::add_score(100)?],
        )?,
        Link::with_actions(
            "Cast a magic spell",
            "Spell",
            vec![Action::add_gold(100)?, Action::add_score(50)?],
        )?,
    ])?;

    let mut sword = passage(
        "Sword",
        "As you swing your sword, the troll redirects it with a skillful maneuver and it pierces your chest.",
        "use_sword",
    )?;
    sword.add_link(failed.clone());

    let mut spell = passage(
        "Spell",
        "Your spell turns the troll to stone. It shatters into rubble, revealing 100 gold coins. You gain the gold and 50 points.",
        "cast_magic_spell",
    )?;
    spell.add_link(succeeded);

    let mut escape = passage(
        "Run Away",
        "The troll sees you and runs after you.",
        "run_away",
    )?;
    escape.add_all_links([
        Link::with_actions("Keep running", "Keep Running", vec![Action::reduce_health(100)?])?,
        Link::with_actions(
            "Stop and cast a magic spell",
            "Spell",
            vec![Action::add_gold(100)?, Action::add_score(50)?],
        )?,
    ])?;

    let mut keep_running = passage(
        "Keep Running",
        "Despite your best efforts, the troll catches up and delivers a powerful blow.",
        "keep_running",
    )?;
    keep_running.add_link(failed);

    let victory = ending(
        "Victory",
        "The troll is no longer a threat and the road ahead is yours. You win!",
        "victory",
    )?;
    let defeat = ending(
        "Defeat",
        "Your quest ends here. Better luck next time.",
        "defeat",
    )?;

    let mut story = Story::new(TROLL_ADVENTURE, bridge)?;
    story.add_all_passages([
        troll,
        choice,
        talk,
        hello,
        kiss,
        friendship,
        feast,
        attack_troll,
        sword,
        spell,
        escape,
        keep_running,
        victory,
        defeat,
    ])?;

    let broken = story.broken_links().len();
    if broken > 0 {
        return Err(DomainError::BrokenLinks { count: broken });
    }

    story.set_icon(ImageHandle::from("images/icons/story_icon.png"));
    story.set_background(ImageHandle::from("images/backgrounds/forest_image.png"));
    story.set_dark_background(ImageHandle::from("images/backgrounds/forest_image_dark.png"));
    story.set_intro1(
        "Embark on a quest through the realm of trolls, across treacherous landscapes \
         and past the creatures that dwell within.",
    )?;
    story.set_intro2("Your choices shape your path through cunning puzzles and daunting obstacles.")?;

    Ok(story)
}
