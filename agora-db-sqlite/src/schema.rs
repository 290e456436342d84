table! {
    post (rowid) {
        rowid -> BigInt,
        id -> Text,
        community_id -> Nullable<Text>,
        author_id -> Text,
        created_at -> BigInt,
        comment_count -> BigInt,
        thumbs_up_count -> BigInt,
        thumbs_down_count -> BigInt,
    }
}

table! {
    comment (rowid) {
        rowid -> BigInt,
        id -> Text,
        post_id -> Text,
        parent_id -> Nullable<Text>,
        depth -> SmallInt,
        author_id -> Text,
        text -> Text,
        thumbs_up_count -> BigInt,
        thumbs_down_count -> BigInt,
        reply_count -> BigInt,
        created_at -> BigInt,
        updated_at -> BigInt,
        edited_at -> Nullable<BigInt>,
        deleted_at -> Nullable<BigInt>,
    }
}

table! {
    reaction (rowid) {
        rowid -> BigInt,
        actor_id -> Text,
        target_type -> SmallInt,
        target_id -> Text,
        value -> SmallInt,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    community_member (rowid) {
        rowid -> BigInt,
        community_id -> Text,
        user_id -> Text,
        role -> SmallInt,
        banned -> Bool,
    }
}

allow_tables_to_appear_in_same_query!(post, comment, reaction, community_member);
