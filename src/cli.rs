use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use agora_application::{error::AppError, prelude as flows};
use agora_boundary as json;
use agora_core::{
    entities::{CommentSort, CommunityRole, ReactionTarget, TargetType},
    repositories::Pagination,
    usecases,
};
use agora_db_sqlite::Connections;

use crate::{config::Config, json as conv};

#[derive(Parser)]
#[command(name = "agora", version, about = "Threaded comments and reactions", long_about = None)]
pub struct Cli {
    /// Configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// SQLite database, overrides the configuration
    #[arg(long, global = true, value_name = "DATABASE_URL")]
    pub db_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Posts that can be commented on
    #[command(subcommand)]
    Post(PostCommand),

    /// Create, edit, delete and list comments
    #[command(subcommand)]
    Comment(CommentCommand),

    /// Toggle a reaction on a comment or post
    React {
        #[arg(long)]
        actor: String,
        /// comment | post
        target_type: String,
        target_id: String,
        /// thumbs_up | thumbs_down
        reaction_type: String,
    },

    /// Show the reaction counts of a comment or post
    Counts {
        /// comment | post
        target_type: String,
        target_id: String,
    },

    /// Community administration
    #[command(subcommand)]
    Community(CommunityCommand),
}

#[derive(Subcommand)]
pub enum PostCommand {
    Create {
        #[arg(long)]
        author: String,
        #[arg(long)]
        community: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum CommentCommand {
    Create {
        #[arg(long)]
        post: String,
        /// Reply to this comment
        #[arg(long)]
        parent: Option<String>,
        #[arg(long)]
        author: String,
        content: String,
    },
    Edit {
        id: String,
        #[arg(long)]
        actor: String,
        content: String,
    },
    Delete {
        id: String,
        #[arg(long)]
        actor: String,
    },
    Show {
        id: String,
    },
    /// Top-level comments of a post
    List {
        post: String,
        /// Include the reactions of this user
        #[arg(long)]
        viewer: Option<String>,
        #[arg(long, value_enum)]
        sort: Option<Sort>,
        #[arg(long)]
        limit: Option<u64>,
        #[arg(long)]
        offset: Option<u64>,
    },
    /// Direct replies of a comment, oldest first
    Replies {
        id: String,
        #[arg(long)]
        limit: Option<u64>,
        #[arg(long)]
        offset: Option<u64>,
    },
}

#[derive(Subcommand)]
pub enum CommunityCommand {
    AssignRole {
        community: String,
        user: String,
        #[arg(value_enum)]
        role: Role,
    },
    Ban {
        community: String,
        user: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Sort {
    Newest,
    Oldest,
    Popular,
}

impl From<Sort> for CommentSort {
    fn from(from: Sort) -> Self {
        match from {
            Sort::Newest => Self::Newest,
            Sort::Oldest => Self::Oldest,
            Sort::Popular => Self::Popular,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Role {
    Member,
    Moderator,
    Admin,
    Owner,
}

impl From<Role> for CommunityRole {
    fn from(from: Role) -> Self {
        match from {
            Role::Member => Self::Member,
            Role::Moderator => Self::Moderator,
            Role::Admin => Self::Admin,
            Role::Owner => Self::Owner,
        }
    }
}

type Result<T> = std::result::Result<T, AppError>;

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|err| AppError::Other(err.into()))
}

fn reaction_target(target_type: &str, target_id: String) -> Result<ReactionTarget> {
    let target_type = usecases::parse_target_type(target_type)?;
    Ok(match target_type {
        TargetType::Comment => ReactionTarget::comment(target_id),
        TargetType::Post => ReactionTarget::post(target_id),
    })
}

fn pagination(config: &Config, limit: Option<u64>, offset: Option<u64>) -> Pagination {
    Pagination {
        offset,
        limit: Some(limit.unwrap_or(config.threads.page_size)),
    }
}

/// Executes a command and returns its JSON output.
pub fn run(command: Command, connections: &Connections, config: &Config) -> Result<String> {
    match command {
        Command::Post(PostCommand::Create { author, community }) => {
            let post = flows::create_post(
                connections,
                usecases::NewPost {
                    community_id: community,
                    author_id: author,
                },
            )?;
            to_pretty_json(&json::Post::from(post))
        }
        Command::Comment(cmd) => run_comment_command(cmd, connections, config),
        Command::React {
            actor,
            target_type,
            target_id,
            reaction_type,
        } => {
            let toggled = flows::toggle_reaction(
                connections,
                usecases::ToggleReaction {
                    actor_id: actor,
                    target: reaction_target(&target_type, target_id)?,
                    reaction_type,
                },
            )?;
            to_pretty_json(&conv::toggled_reaction(toggled))
        }
        Command::Counts {
            target_type,
            target_id,
        } => {
            let target = reaction_target(&target_type, target_id)?;
            let counts = flows::get_reaction_counts(connections, &target)?;
            to_pretty_json(&json::ReactionCounts::from(counts))
        }
        Command::Community(CommunityCommand::AssignRole {
            community,
            user,
            role,
        }) => {
            let member = flows::assign_community_role(connections, &community, &user, role.into())?;
            to_pretty_json(&json::CommunityMember::from(member))
        }
        Command::Community(CommunityCommand::Ban { community, user }) => {
            let member = flows::ban_community_member(connections, &community, &user)?;
            to_pretty_json(&json::CommunityMember::from(member))
        }
    }
}

fn run_comment_command(
    command: CommentCommand,
    connections: &Connections,
    config: &Config,
) -> Result<String> {
    match command {
        CommentCommand::Create {
            post,
            parent,
            author,
            content,
        } => {
            let comment = flows::create_comment(
                connections,
                usecases::NewComment {
                    post_id: post,
                    parent_id: parent,
                    author_id: author,
                    text: content,
                },
            )?;
            to_pretty_json(&json::Comment::from(comment))
        }
        CommentCommand::Edit { id, actor, content } => {
            let comment = flows::update_comment(
                connections,
                usecases::UpdateComment {
                    id,
                    actor_id: actor,
                    text: content,
                },
            )?;
            to_pretty_json(&json::Comment::from(comment))
        }
        CommentCommand::Delete { id, actor } => {
            flows::delete_comment(connections, &id, &actor)?;
            to_pretty_json(&())
        }
        CommentCommand::Show { id } => {
            let comment = flows::get_comment(connections, &id)?;
            to_pretty_json(&json::Comment::from(comment))
        }
        CommentCommand::List {
            post,
            viewer,
            sort,
            limit,
            offset,
        } => {
            let query = usecases::CommentQuery {
                sort: sort.map_or(config.threads.default_sort, Into::into),
                pagination: pagination(config, limit, offset),
            };
            let page = flows::load_comment_page(connections, viewer.as_deref(), &post, &query)?;
            to_pretty_json(&conv::comment_page(page))
        }
        CommentCommand::Replies { id, limit, offset } => {
            let replies = flows::list_replies(connections, &id, &pagination(config, limit, offset))?;
            let replies: Vec<_> = replies.into_iter().map(json::Comment::from).collect();
            to_pretty_json(&replies)
        }
    }
}
