use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    ExternalId,
    Email,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    Id,
    UserId,
    Name,
    Email,
    Phone,
    Address,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Price,
    Stock,
    Category,
    Size,
    Images,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProductKustoms {
    Table,
    Id,
    ModelId,
    Name,
    ModelUrl,
    PreviewUrl,
    UvMapUrl,
    Price,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    OrderId,
    CustomerId,
    ProductId,
    ProductKustomId,
    Status,
    Quantity,
    TotalAmount,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Designs {
    Table,
    Id,
    OrderId,
    Canvas,
    PreviewImage,
    BackgroundColor,
    DecalColor,
    CanvasWidth,
    CanvasHeight,
    UvGuide,
    TotalObjects,
    CreatedAt,
}

#[derive(DeriveIden)]
enum DesignObjects {
    Table,
    Id,
    DesignId,
    ObjectType,
    Left,
    Top,
    Width,
    Height,
    Angle,
    ScaleX,
    ScaleY,
    Fill,
    Stroke,
    Text,
    FontFamily,
    FontSize,
    Src,
    Extra,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::ExternalId).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().null())
                    .col(ColumnDef::new(Users::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_users_external_id")
                    .table(Users::Table)
                    .col(Users::ExternalId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Customers::Name).string().not_null())
                    .col(ColumnDef::new(Customers::Email).string().not_null())
                    .col(ColumnDef::new(Customers::Phone).string().not_null())
                    .col(ColumnDef::new(Customers::Address).string().not_null())
                    .col(ColumnDef::new(Customers::Notes).string().null())
                    .col(ColumnDef::new(Customers::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Customers::UpdatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customers_user_id")
                            .from(Customers::Table, Customers::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // one Customer per application user
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_customers_user_id")
                    .table(Customers::Table)
                    .col(Customers::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Products::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Products::Name).string().not_null())
                    .col(ColumnDef::new(Products::Price).big_integer().not_null())
                    .col(ColumnDef::new(Products::Stock).integer().not_null().default(0))
                    .col(ColumnDef::new(Products::Category).string().null())
                    .col(ColumnDef::new(Products::Size).string().null())
                    .col(ColumnDef::new(Products::Images).json().null())
                    .col(ColumnDef::new(Products::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Products::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductKustoms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductKustoms::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProductKustoms::ModelId).string().not_null())
                    .col(ColumnDef::new(ProductKustoms::Name).string().not_null())
                    .col(ColumnDef::new(ProductKustoms::ModelUrl).string().not_null())
                    .col(ColumnDef::new(ProductKustoms::PreviewUrl).string().null())
                    .col(ColumnDef::new(ProductKustoms::UvMapUrl).string().null())
                    .col(ColumnDef::new(ProductKustoms::Price).big_integer().not_null())
                    .col(
                        ColumnDef::new(ProductKustoms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductKustoms::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_product_kustoms_model_id")
                    .table(ProductKustoms::Table)
                    .col(ProductKustoms::ModelId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Orders::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Orders::OrderId).string().not_null())
                    .col(ColumnDef::new(Orders::CustomerId).big_integer().not_null())
                    .col(ColumnDef::new(Orders::ProductId).string().null())
                    .col(ColumnDef::new(Orders::ProductKustomId).big_integer().null())
                    .col(ColumnDef::new(Orders::Status).string_len(16).not_null())
                    .col(ColumnDef::new(Orders::Quantity).integer().null())
                    .col(ColumnDef::new(Orders::TotalAmount).big_integer().not_null())
                    .col(ColumnDef::new(Orders::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Orders::UpdatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_customer_id")
                            .from(Orders::Table, Orders::CustomerId)
                            .to(Customers::Table, Customers::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_product_id")
                            .from(Orders::Table, Orders::ProductId)
                            .to(Products::Table, Products::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_product_kustom_id")
                            .from(Orders::Table, Orders::ProductKustomId)
                            .to(ProductKustoms::Table, ProductKustoms::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // order_id is client-supplied and used for lookup, must stay unique
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_orders_order_id")
                    .table(Orders::Table)
                    .col(Orders::OrderId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_orders_customer_id")
                    .table(Orders::Table)
                    .col(Orders::CustomerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_orders_status")
                    .table(Orders::Table)
                    .col(Orders::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Designs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Designs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Designs::OrderId).big_integer().not_null())
                    .col(ColumnDef::new(Designs::Canvas).json().null())
                    .col(ColumnDef::new(Designs::PreviewImage).text().null())
                    .col(ColumnDef::new(Designs::BackgroundColor).string().not_null())
                    .col(ColumnDef::new(Designs::DecalColor).string().not_null())
                    .col(ColumnDef::new(Designs::CanvasWidth).integer().not_null())
                    .col(ColumnDef::new(Designs::CanvasHeight).integer().not_null())
                    .col(ColumnDef::new(Designs::UvGuide).boolean().not_null())
                    .col(ColumnDef::new(Designs::TotalObjects).integer().not_null())
                    .col(ColumnDef::new(Designs::CreatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_designs_order_id")
                            .from(Designs::Table, Designs::OrderId)
                            .to(Orders::Table, Orders::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_designs_order_id")
                    .table(Designs::Table)
                    .col(Designs::OrderId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DesignObjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DesignObjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DesignObjects::DesignId).big_integer().not_null())
                    .col(ColumnDef::new(DesignObjects::ObjectType).string().not_null())
                    .col(ColumnDef::new(DesignObjects::Left).double().null())
                    .col(ColumnDef::new(DesignObjects::Top).double().null())
                    .col(ColumnDef::new(DesignObjects::Width).double().null())
                    .col(ColumnDef::new(DesignObjects::Height).double().null())
                    .col(ColumnDef::new(DesignObjects::Angle).double().null())
                    .col(ColumnDef::new(DesignObjects::ScaleX).double().null())
                    .col(ColumnDef::new(DesignObjects::ScaleY).double().null())
                    .col(ColumnDef::new(DesignObjects::Fill).string().null())
                    .col(ColumnDef::new(DesignObjects::Stroke).string().null())
                    .col(ColumnDef::new(DesignObjects::Text).string().null())
                    .col(ColumnDef::new(DesignObjects::FontFamily).string().null())
                    .col(ColumnDef::new(DesignObjects::FontSize).double().null())
                    .col(ColumnDef::new(DesignObjects::Src).text().null())
                    .col(ColumnDef::new(DesignObjects::Extra).json().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_design_objects_design_id")
                            .from(DesignObjects::Table, DesignObjects::DesignId)
                            .to(Designs::Table, Designs::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_design_objects_design_id")
                    .table(DesignObjects::Table)
                    .col(DesignObjects::DesignId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DesignObjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Designs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProductKustoms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
