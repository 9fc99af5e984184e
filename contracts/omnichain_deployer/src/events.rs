use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectLaunched {
    pub project_id: u64,
    pub owner: Address,
    pub caller: Address,
    pub hook: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SuckersDeployed {
    pub project_id: u64,
    pub requester: Address,
    pub salt: BytesN<32>,
    pub suckers: Vec<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RulesetsQueued {
    pub project_id: u64,
    pub caller: Address,
    pub ruleset_id: u64,
}

pub fn emit_project_launched(
    env: &Env,
    project_id: u64,
    owner: Address,
    caller: Address,
    hook: Option<Address>,
) {
    let topics = (symbol_short!("launched"), project_id);
    let data = ProjectLaunched {
        project_id,
        owner,
        caller,
        hook,
    };
    env.events().publish(topics, data);
}

pub fn emit_suckers_deployed(
    env: &Env,
    project_id: u64,
    requester: Address,
    salt: BytesN<32>,
    suckers: Vec<Address>,
) {
    let topics = (symbol_short!("suckers"), project_id);
    let data = SuckersDeployed {
        project_id,
        requester,
        salt,
        suckers,
    };
    env.events().publish(topics, data);
}

pub fn emit_rulesets_queued(env: &Env, project_id: u64, caller: Address, ruleset_id: u64) {
    let topics = (symbol_short!("queued"), project_id);
    let data = RulesetsQueued {
        project_id,
        caller,
        ruleset_id,
    };
    env.events().publish(topics, data);
}
