use chrono::Utc;
use pokedex_progress::progression::evolution;
use pokedex_progress::{
    new_profile, record_catch, CaughtPokemon, EconomyConfig, GameResult, Ledger, Mission,
    MissionTracker, Rarity, RequirementKind, Team, TeamPokemon,
};
use std::env;
use std::fs;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SAMPLE_CHAIN: &str = r#"{
    "id": 1,
    "chain": {
        "species": {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/"},
        "evolution_details": [],
        "evolves_to": [{
            "species": {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon-species/2/"},
            "evolution_details": [{"min_level": 16, "trigger": {"name": "level-up", "url": ""}}],
            "evolves_to": [{
                "species": {"name": "venusaur", "url": "https://pokeapi.co/api/v2/pokemon-species/3/"},
                "evolution_details": [{"min_level": 32, "trigger": {"name": "level-up", "url": ""}}],
                "evolves_to": []
            }]
        }]
    }
}"#;

/// Walk through one session: catch a few Pokémon, build a team, watch
/// missions complete, then print an evolution chain.
///
/// Usage: pokedex-progress [economy.ron] [evolution-chain.json]
fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_progress=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(args.first().map(String::as_str), args.get(1).map(String::as_str)) {
        println!("Error: {}", e);
    }
}

fn run(config_path: Option<&str>, chain_path: Option<&str>) -> GameResult<()> {
    let config = match config_path {
        Some(path) => EconomyConfig::load(Path::new(path))?,
        None => EconomyConfig::default(),
    };
    let ledger = Ledger::new(config);

    let mut profile = new_profile("demo-user", "Ash");
    let mut team = Team::new("team-1".into(), profile.user_id.clone(), "Kanto".into());
    let mut tracker = MissionTracker::new(demo_missions(), vec![]);

    let catches = [
        (1, "bulbasaur", vec!["grass", "poison"]),
        (4, "charmander", vec!["fire"]),
        (7, "squirtle", vec!["water"]),
    ];

    for (pokemon_id, name, types) in catches {
        let result = record_catch(
            &mut profile,
            &ledger,
            CaughtPokemon {
                pokemon_id,
                types: types.iter().map(|t| t.to_string()).collect(),
                generation: 1,
            },
        );
        for event in &result.events {
            tracker.apply(event, Utc::now());
        }

        let slot = team.add_to_first_empty_slot(TeamPokemon {
            pokemon_id,
            name: name.to_string(),
            sprite_url: evolution::sprite_url(pokemon_id),
            slot_index: 0,
        })?;
        tracker.apply(
            &pokedex_progress::GameEvent::TeamMemberAdded {
                pokemon_id,
                team_size: team.len(),
            },
            Utc::now(),
        );
        println!("Caught {} -> slot {}", name, slot);
    }

    for mission in tracker.missions().to_vec() {
        if tracker.claim(&mission.id, &mut profile, &ledger, Utc::now()).is_ok() {
            println!("Claimed '{}'", mission.title);
        }
    }

    let stats = tracker.stats();
    println!();
    println!(
        "{}: level {} | {} xp | {} gold",
        profile.username, profile.level, profile.xp, profile.gold
    );
    println!(
        "Missions: {}/{} complete ({:.0}%), {} remaining",
        stats.completed,
        stats.total,
        stats.completion_percentage * 100.0,
        stats.remaining
    );
    println!("Team: {} members, {} empty slots", team.len(), team.empty_slots());

    let chain_json = match chain_path {
        Some(path) => match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                println!("Could not read {}: {}", path, e);
                return Ok(());
            }
        },
        None => SAMPLE_CHAIN.to_string(),
    };

    match evolution::parse_chain(&chain_json) {
        Ok(response) => {
            println!();
            println!("Evolution chain #{}:", response.id);
            for step in evolution::flatten(&response.chain) {
                let indent = "  ".repeat(step.stage + 1);
                match step.trigger {
                    Some(trigger) => println!(
                        "{}#{:03} {} ({})",
                        indent, step.species_id, step.display_name, trigger
                    ),
                    None => println!("{}#{:03} {}", indent, step.species_id, step.display_name),
                }
            }
        }
        Err(e) => println!("Error parsing evolution chain: {}", e),
    }

    Ok(())
}

fn demo_missions() -> Vec<Mission> {
    let mission = |id: &str,
                   title: &str,
                   kind: RequirementKind,
                   threshold: i64,
                   rarity: Rarity,
                   gold: i64,
                   xp: i64| Mission {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        rarity,
        requirement_kind: kind,
        requirement_value: threshold,
        requirement_filter: None,
        gold_reward: gold,
        xp_reward: xp,
    };

    vec![
        mission(
            "first-catch",
            "First Catch",
            RequirementKind::CollectionCount,
            1,
            Rarity::Common,
            20,
            50,
        ),
        mission(
            "starter-trio",
            "Starter Trio",
            RequirementKind::CollectionCount,
            3,
            Rarity::Rare,
            100,
            150,
        ),
        mission(
            "full-team",
            "Full Team",
            RequirementKind::TeamCount,
            6,
            Rarity::Epic,
            250,
            300,
        ),
    ]
}
