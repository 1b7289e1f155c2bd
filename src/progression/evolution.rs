use schema::{ChainLink, EvolutionChainResponse, EvolutionDetail, NamedApiResource};
use serde::{Deserialize, Serialize};

const SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// One species in a flattened evolution chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionStep {
    /// National dex id parsed from the species URL, 0 if the URL was unusable
    pub species_id: u32,
    /// API name, e.g. "mr-mime"
    pub name: String,
    /// Human name, e.g. "Mr Mime"
    pub display_name: String,
    pub sprite_url: String,
    /// Depth in the tree; the base species is stage 0
    pub stage: usize,
    pub evolves_from: Option<u32>,
    /// Level requirement of the transition into this species, if any
    pub min_level: Option<u32>,
    /// How this species is reached from its predecessor. None for the base species.
    pub trigger: Option<String>,
}

/// Parse a raw `/evolution-chain/{id}` payload
pub fn parse_chain(json: &str) -> serde_json::Result<EvolutionChainResponse> {
    serde_json::from_str(json)
}

/// Flatten the chain tree in depth-first pre-order, so a linear chain comes
/// out in stage order and branches follow their parent in API order.
pub fn flatten(chain: &ChainLink) -> Vec<EvolutionStep> {
    let mut steps = Vec::new();
    let mut stack: Vec<(&ChainLink, usize, Option<u32>)> = vec![(chain, 0, None)];

    while let Some((link, stage, evolves_from)) = stack.pop() {
        let step = build_step(link, stage, evolves_from);
        let species_id = step.species_id;
        steps.push(step);

        // Reverse so the first child is popped first
        for child in link.evolves_to.iter().rev() {
            stack.push((child, stage + 1, Some(species_id)));
        }
    }

    steps
}

/// The line from the base species down to `species_id`, inclusive.
/// None if the species is not in this chain.
pub fn evolution_path(chain: &ChainLink, species_id: u32) -> Option<Vec<EvolutionStep>> {
    let mut links = Vec::new();
    if !find_path(chain, species_id, &mut links) {
        return None;
    }

    let mut path = Vec::with_capacity(links.len());
    let mut previous = None;
    for (stage, link) in links.into_iter().enumerate() {
        let step = build_step(link, stage, previous);
        previous = Some(step.species_id);
        path.push(step);
    }
    Some(path)
}

/// Direct evolutions of `species_id` within this chain
pub fn next_evolutions(chain: &ChainLink, species_id: u32) -> Vec<EvolutionStep> {
    flatten(chain)
        .into_iter()
        .filter(|step| step.evolves_from == Some(species_id))
        .collect()
}

fn find_path<'a>(link: &'a ChainLink, species_id: u32, path: &mut Vec<&'a ChainLink>) -> bool {
    path.push(link);
    if species_id_from_url(&link.species.url) == Some(species_id) {
        return true;
    }
    for child in &link.evolves_to {
        if find_path(child, species_id, path) {
            return true;
        }
    }
    path.pop();
    false
}

fn build_step(link: &ChainLink, stage: usize, evolves_from: Option<u32>) -> EvolutionStep {
    let species_id = species_id_from_url(&link.species.url).unwrap_or_else(|| {
        tracing::warn!(
            "Could not read species id from '{}' for {}",
            link.species.url,
            link.species.name
        );
        0
    });

    // Several details mean alternative triggers; the first one wins.
    let detail = if stage == 0 {
        None
    } else {
        link.evolution_details.first()
    };

    EvolutionStep {
        species_id,
        name: link.species.name.clone(),
        display_name: display_name(&link.species.name),
        sprite_url: sprite_url(species_id),
        stage,
        evolves_from,
        min_level: detail.and_then(|d| d.min_level),
        trigger: detail.and_then(describe_trigger),
    }
}

/// Read the trailing numeric path segment of an API resource URL,
/// e.g. `.../pokemon-species/25/` gives 25.
pub fn species_id_from_url(url: &str) -> Option<u32> {
    url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}

/// Official artwork URL for a species id. Empty for an unknown id.
pub fn sprite_url(species_id: u32) -> String {
    if species_id == 0 {
        return String::new();
    }
    format!("{}/{}.png", SPRITE_BASE_URL, species_id)
}

/// "mr-mime" -> "Mr Mime"
pub fn display_name(api_name: &str) -> String {
    api_name
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human-readable trigger for one evolution-detail entry
pub fn describe_trigger(detail: &EvolutionDetail) -> Option<String> {
    let mut parts = Vec::new();

    let trigger_name = detail.trigger.as_ref().map(|t| t.name.as_str());
    if trigger_name == Some("trade") {
        parts.push("Trade".to_string());
    }
    if let Some(level) = detail.min_level {
        parts.push(format!("Level {}", level));
    }
    if let Some(item) = &detail.item {
        parts.push(format!("Use {}", resource_name(item)));
    }
    if let Some(item) = &detail.held_item {
        parts.push(format!("Holding {}", resource_name(item)));
    }
    if let Some(known_move) = &detail.known_move {
        parts.push(format!("Knowing {}", resource_name(known_move)));
    }
    if !detail.time_of_day.is_empty() {
        parts.push(format!("During {}", detail.time_of_day));
    }
    if let Some(happiness) = detail.min_happiness {
        parts.push(format!("Friendship {}+", happiness));
    }

    if parts.is_empty() {
        // Nothing specific recorded, fall back to the bare trigger name
        return trigger_name.map(display_name);
    }
    Some(parts.join(", "))
}

fn resource_name(resource: &NamedApiResource) -> String {
    display_name(&resource.name)
}
