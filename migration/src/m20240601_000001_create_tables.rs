use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MovieTable::Table)
                    .if_not_exists()
                    .col(pk_auto(MovieTable::Id))
                    .col(string_null(MovieTable::Image))
                    .col(string_null(MovieTable::Title))
                    .col(string_null(MovieTable::Genre))
                    .col(integer_null(MovieTable::Rating))
                    .col(string_null(MovieTable::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ActorTable::Table)
                    .if_not_exists()
                    .col(pk_auto(ActorTable::Id))
                    .col(string(ActorTable::Name))
                    .col(integer_null(ActorTable::Age))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CreditTable::Table)
                    .if_not_exists()
                    .col(pk_auto(CreditTable::Id))
                    .col(string(CreditTable::Role))
                    .col(integer(CreditTable::MovieId))
                    .col(integer(CreditTable::ActorId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_credit_table_movie_id_movie_table")
                            .from(CreditTable::Table, CreditTable::MovieId)
                            .to(MovieTable::Table, MovieTable::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_credit_table_actor_id_actor_table")
                            .from(CreditTable::Table, CreditTable::ActorId)
                            .to(ActorTable::Table, ActorTable::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_credit_table_movie_id")
                    .table(CreditTable::Table)
                    .col(CreditTable::MovieId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_credit_table_actor_id")
                    .table(CreditTable::Table)
                    .col(CreditTable::ActorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CreditTable::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(ActorTable::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieTable::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum MovieTable {
    Table,
    Id,
    Image,
    Title,
    Genre,
    Rating,
    Description,
}

#[derive(DeriveIden)]
enum ActorTable {
    Table,
    Id,
    Name,
    Age,
}

#[derive(DeriveIden)]
enum CreditTable {
    Table,
    Id,
    Role,
    MovieId,
    ActorId,
}
