use schema::{ChainLink, EvolutionDetail, NamedApiResource, UserProfile};

/// Builder for profiles used across tests
pub struct TestProfileBuilder {
    profile: UserProfile,
}

impl TestProfileBuilder {
    pub fn new(username: &str) -> Self {
        Self {
            profile: UserProfile {
                user_id: format!("user-{}", username),
                username: username.to_string(),
                gold: 0,
                xp: 0,
                level: 1,
                equipped: Default::default(),
                stats: Default::default(),
            },
        }
    }

    pub fn with_gold(mut self, gold: i64) -> Self {
        self.profile.gold = gold;
        self
    }

    pub fn with_xp(mut self, xp: i64, level: u32) -> Self {
        self.profile.xp = xp;
        self.profile.level = level;
        self
    }

    pub fn build(self) -> UserProfile {
        self.profile
    }
}

pub fn species(name: &str, id: u32) -> NamedApiResource {
    NamedApiResource {
        name: name.to_string(),
        url: format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id),
    }
}

pub fn level_detail(level: u32) -> EvolutionDetail {
    EvolutionDetail {
        min_level: Some(level),
        trigger: Some(NamedApiResource {
            name: "level-up".to_string(),
            url: String::new(),
        }),
        ..Default::default()
    }
}

pub fn link(
    name: &str,
    id: u32,
    details: Vec<EvolutionDetail>,
    evolves_to: Vec<ChainLink>,
) -> ChainLink {
    ChainLink {
        is_baby: false,
        species: species(name, id),
        evolution_details: details,
        evolves_to,
    }
}
