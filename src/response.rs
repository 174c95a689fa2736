//! Response payloads and the builders that assemble nested views.
//! List endpoints serialize the flat records from `model` directly; the
//! shapes here are the deep views for detail and create endpoints.

use crate::error::AppError;
use crate::model::{Hero, HeroPower, Power, Strength};
use crate::store::Store;
use serde::Serialize;
use std::collections::HashMap;

/// Single-hero detail: the hero plus each join row with its power embedded.
#[derive(Debug, Serialize)]
pub struct HeroDetail {
    pub id: i32,
    pub name: String,
    pub super_name: String,
    pub hero_powers: Vec<HeroPowerWithPower>,
}

#[derive(Debug, Serialize)]
pub struct HeroPowerWithPower {
    pub id: i32,
    pub strength: Strength,
    pub hero_id: i32,
    pub power_id: i32,
    pub power: Power,
}

/// Created join record with both endpoints embedded.
#[derive(Debug, Serialize)]
pub struct HeroPowerDetail {
    pub id: i32,
    pub strength: Strength,
    pub hero_id: i32,
    pub power_id: i32,
    pub hero: Hero,
    pub power: Power,
}

#[derive(Debug, Serialize)]
pub struct DeleteMessage {
    pub message: &'static str,
}

/// Assemble the deep hero view from explicit store queries.
pub async fn hero_detail(store: &dyn Store, hero: Hero) -> Result<HeroDetail, AppError> {
    let hero_powers = store.hero_powers_by_hero(hero.id).await?;
    let power_ids: Vec<i32> = hero_powers.iter().map(|hp| hp.power_id).collect();
    let powers: HashMap<i32, Power> = store
        .powers_by_ids(&power_ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();
    let hero_powers = hero_powers
        .into_iter()
        .filter_map(|hp| {
            // A join row whose power vanished mid-request has nothing to show.
            let power = powers.get(&hp.power_id).cloned()?;
            Some(HeroPowerWithPower {
                id: hp.id,
                strength: hp.strength,
                hero_id: hp.hero_id,
                power_id: hp.power_id,
                power,
            })
        })
        .collect();
    Ok(HeroDetail {
        id: hero.id,
        name: hero.name,
        super_name: hero.super_name,
        hero_powers,
    })
}

pub fn hero_power_detail(hero_power: HeroPower, hero: Hero, power: Power) -> HeroPowerDetail {
    HeroPowerDetail {
        id: hero_power.id,
        strength: hero_power.strength,
        hero_id: hero.id,
        power_id: power.id,
        hero,
        power,
    }
}

pub fn hero_power_deleted() -> DeleteMessage {
    DeleteMessage {
        message: "Hero Power deleted successfully",
    }
}
